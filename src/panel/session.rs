use super::{
    reducer::{self, Transition},
    render,
    state::NavigationState,
};
use crate::app::decoder::{InputDecoder, KeyInput};
use crate::domain::launcher::PaneOpener;
use crate::domain::models::Menu;
use crate::terminal::{RawMode, RawModeGuard};

use anyhow::Result;
use std::io::{Read, Write};

/// How a panel session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelExit {
    Cancelled,
    Interrupted,
}

pub struct PanelSession<'a, R, W, M: ?Sized, O: ?Sized> {
    pub menu: &'a Menu,
    pub decoder: InputDecoder<R>,
    pub out: W,
    pub raw_mode: &'a M,
    pub opener: &'a O,
}

impl<R, W, M, O> PanelSession<'_, R, W, M, O>
where
    R: Read,
    W: Write,
    M: RawMode + ?Sized,
    O: PaneOpener + ?Sized,
{
    pub fn run(&mut self) -> Result<PanelExit> {
        let mut state = NavigationState::new(self.menu.item_count());

        loop {
            render::draw(&mut self.out, self.menu, &state)?;

            match reducer::update(&mut state, self.read_key()?) {
                Transition::Stay => {}
                Transition::Launch {
                    position,
                    placement,
                } => {
                    if let Some(item) = self.menu.get(position) {
                        // Launch failures are not shown; the menu carries on.
                        if let Err(e) = self.opener.open(&item.name, placement) {
                            tracing::warn!(program = %item.name, %placement, error = %e, "launch failed");
                        }
                    }
                }
                Transition::Exit => {
                    render::draw_exit(&mut self.out)?;
                    return Ok(PanelExit::Cancelled);
                }
                Transition::Interrupt => return Ok(PanelExit::Interrupted),
            }
        }
    }

    /// Raw mode is held only while a single key is read.
    fn read_key(&mut self) -> Result<KeyInput> {
        let _guard = RawModeGuard::acquire(self.raw_mode)?;
        Ok(self.decoder.next_key()?)
    }
}
