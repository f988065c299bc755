//! Leveled console output.
//!
//! Every line is `"{prefix} {message}"` followed by the platform line ending.
//! Nothing is filtered: each call writes exactly one line.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const LEVEL_PREFIX: [&str; 4] = ["DEBUG", "ERROR", "INFO ", "WARN "];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug = 0,
    Error = 1,
    Info = 2,
    Warn = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [LogLevel::Debug, LogLevel::Error, LogLevel::Info, LogLevel::Warn];

    /// Five-character display prefix.
    pub fn prefix(self) -> &'static str {
        LEVEL_PREFIX[self as usize]
    }

    /// Lowercase name, used for the script-side function names.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
        }
    }
}

pub struct Console {
    out: RefCell<Box<dyn Write>>,
}

impl Console {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer(writer: impl Write + 'static) -> Self {
        Self {
            out: RefCell::new(Box::new(writer)),
        }
    }

    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        write!(out, "{:>5} ", level.prefix())?;
        out.write_fmt(args)?;
        out.write_all(LINE_ENDING.as_bytes())?;
        out.flush()
    }

    /// Write already-rendered values on one line, separated by tabs. Values
    /// are raw bytes and need not be UTF-8.
    pub fn log_values<I, S>(&self, level: LogLevel, values: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut out = self.out.borrow_mut();
        write!(out, "{:>5} ", level.prefix())?;
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                out.write_all(b"\t")?;
            }
            out.write_all(value.as_ref())?;
        }
        out.write_all(LINE_ENDING.as_bytes())?;
        out.flush()
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(LogLevel::Debug, args)
    }

    pub fn error(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(LogLevel::Error, args)
    }

    pub fn info(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(LogLevel::Info, args)
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(LogLevel::Warn, args)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

/// In-memory sink that stays readable after being handed to a [`Console`].
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .split_terminator(LINE_ENDING)
            .map(str::to_owned)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
