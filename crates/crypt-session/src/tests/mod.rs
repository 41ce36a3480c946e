mod history;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crypt_core::settings::Settings;

use super::{Response, Session};

pub(super) fn make_session(crypt: &str) -> Session {
    Session::new(crypt, Settings::default().display)
}

pub(super) fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// Helper: feed several lines, returning the last response
pub(super) fn feed(session: &mut Session, lines: &[&str]) -> Response {
    let mut rng = rng();
    let mut last = None;
    for line in lines {
        last = Some(session.handle_line(line, &mut rng));
    }
    last.unwrap()
}
