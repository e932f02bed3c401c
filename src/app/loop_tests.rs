use super::*;
use crate::domain::launcher::MockLauncher;
use crate::domain::models::{ToolName, ToolRegistry};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn registry() -> ToolRegistry {
    ToolRegistry::new([
        ("docker", "lazydocker", false),
        ("git", "lazygit", true),
        ("monitor", "btop --utf-force", true),
    ]
    .map(|(name, command, foreground)| ToolEntry {
        name: ToolName(name.to_string()),
        command: command.to_string(),
        foreground,
    }))
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn ctrl_c() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

async fn feed(events: Vec<Event>) -> mpsc::Receiver<Result<Event, std::io::Error>> {
    let (tx, rx) = mpsc::channel(events.len().max(1));
    for event in events {
        tx.send(Ok(event)).await.unwrap();
    }
    rx
}

#[tokio::test]
async fn test_search_then_select_launches() {
    let mut launcher = MockLauncher::new();
    launcher
        .expect_is_available()
        .with(mockall::predicate::eq("lazygit"))
        .times(1)
        .returning(|_| true);
    launcher.expect_launch().never();

    let registry = registry();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let rx = feed(vec![key('g'), key('i'), key('1')]).await;

    let exit = run_loop_with_events(&mut terminal, SearchState::new(&registry, 9), &launcher, rx)
        .await
        .unwrap();

    match exit {
        SessionExit::Launch(entry) => {
            assert_eq!(entry.name.0, "git");
            assert!(entry.foreground);
        }
        other => panic!("Expected SessionExit::Launch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_executable_keeps_session_alive() {
    let mut launcher = MockLauncher::new();
    launcher.expect_is_available().returning(|_| false);

    let registry = registry();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    // Select "monitor", then interrupt.
    let rx = feed(vec![key('3'), ctrl_c()]).await;

    let exit = run_loop_with_events(&mut terminal, SearchState::new(&registry, 9), &launcher, rx)
        .await
        .unwrap();
    assert_eq!(exit, SessionExit::Interrupted);
}

#[tokio::test]
async fn test_missing_executable_error_is_rendered() {
    let mut launcher = MockLauncher::new();
    launcher.expect_is_available().returning(|_| false);

    let registry = registry();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    // The channel closes after the selection, ending the session after one more draw.
    let rx = feed(vec![key('3')]).await;

    run_loop_with_events(&mut terminal, SearchState::new(&registry, 9), &launcher, rx)
        .await
        .unwrap();

    let buffer = terminal.backend().buffer();
    let rendered: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(rendered.contains("Command 'btop' not found in PATH."));
}

#[tokio::test]
async fn test_interrupt_exits_without_launch() {
    let mut launcher = MockLauncher::new();
    launcher.expect_is_available().never();

    let registry = registry();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let rx = feed(vec![key('d'), ctrl_c(), key('1')]).await;

    let exit = run_loop_with_events(&mut terminal, SearchState::new(&registry, 9), &launcher, rx)
        .await
        .unwrap();
    assert_eq!(exit, SessionExit::Interrupted);
}

#[tokio::test]
async fn test_input_error_is_propagated() {
    let launcher = MockLauncher::new();
    let registry = registry();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (tx, rx) = mpsc::channel(1);
    tx.send(Err(std::io::Error::other("tty gone"))).await.unwrap();

    let result =
        run_loop_with_events(&mut terminal, SearchState::new(&registry, 9), &launcher, rx).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut launcher = MockLauncher::new();
    // Never resolvable, so selections only ever produce inline errors.
    launcher.expect_is_available().returning(|_| false);
    launcher.expect_launch().never();

    let registry = registry();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => Event::Resize(rng.gen_range(0..200), rng.gen_range(0..100)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        let _ = event_tx.send(Ok(ctrl_c())).await;
    });

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, SearchState::new(&registry, 9), &launcher, event_rx),
    )
    .await;

    match result {
        Ok(res) => assert_eq!(res.unwrap(), SessionExit::Interrupted),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..12) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Backspace,
        5 => KeyCode::Tab,
        6 => KeyCode::Char(rng.gen_range(b'0'..=b'9') as char),
        _ => KeyCode::Char(rng.gen_range(b'a'..=b'z') as char),
    };
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}
