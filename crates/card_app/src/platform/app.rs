use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use card_core::{CardImageStore, STORE_ID};
use card_logging::{card_info, card_warn};

use super::constants::LOG_DESTINATION;
use super::error::AppError;
use super::{input, logging, render};

pub fn run_app() -> Result<(), AppError> {
    logging::initialize(LOG_DESTINATION);

    let stdin = io::stdin();
    let output = Rc::new(RefCell::new(io::stdout()));
    run_session(stdin.lock(), output)
}

/// Runs one session: a fresh store lives until `reader` is exhausted.
pub(crate) fn run_session<R, W>(mut reader: R, output: Rc<RefCell<W>>) -> Result<(), AppError>
where
    R: BufRead,
    W: Write + 'static,
{
    let mut store = CardImageStore::new();
    card_info!("{STORE_ID}: session started");

    let render_error: Rc<RefCell<Option<io::Error>>> = Rc::default();
    let failed = Rc::clone(&render_error);
    store.subscribe(move |view| {
        if failed.borrow().is_some() {
            return;
        }
        if let Err(err) = render::render(&mut *output.borrow_mut(), view) {
            *failed.borrow_mut() = Some(err);
        }
    });

    let mut line = Vec::new();
    let mut line_number = 0usize;
    loop {
        line.clear();
        if reader
            .read_until(b'\n', &mut line)
            .map_err(AppError::ReadInput)?
            == 0
        {
            break;
        }
        line_number += 1;
        match input::parse_card_bytes(&line) {
            Ok(Some(msg)) => store.dispatch(msg),
            Ok(None) => {}
            Err(err) => card_warn!("line {line_number}: {err}"),
        }
        if let Some(err) = render_error.borrow_mut().take() {
            return Err(AppError::Render(err));
        }
    }

    card_info!("{STORE_ID}: session ended");
    Ok(())
}
