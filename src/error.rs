use ufmt::{uDebug, uWrite, Formatter};

/// Errors surfaced by the game core
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A button pin could not be sampled
    Input,
}

impl uDebug for Error {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Error::Input => f.write_str("Input"),
        }
    }
}
