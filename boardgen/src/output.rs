//! Output sinks for the generated markup.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::CliError;

/// Counts the bytes passed through to the inner writer.
struct CountingWriter<W> {
    inner: W,
    written: usize,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Run `write` against `path`, creating or truncating the file.
///
/// # Errors
///
/// Returns [`CliError::Output`] carrying the path if the file cannot be created
/// or written.
fn write_to_path<F>(path: &Path, write: F) -> Result<usize, CliError>
where
    F: FnOnce(&mut CountingWriter<BufWriter<File>>) -> io::Result<()>,
{
    let to_output_error = |source: io::Error| CliError::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_output_error)?;
    let mut out = CountingWriter::new(BufWriter::new(file));
    write(&mut out)
        .and_then(|()| out.flush())
        .map_err(to_output_error)?;

    Ok(out.written)
}

/// Run `write` against stdout.
///
/// # Errors
///
/// Returns [`CliError::Write`] if stdout is closed or otherwise unwritable.
fn write_to_stdout<F>(write: F) -> Result<usize, CliError>
where
    F: FnOnce(&mut CountingWriter<io::StdoutLock<'static>>) -> io::Result<()>,
{
    let mut out = CountingWriter::new(io::stdout().lock());
    write(&mut out)?;
    out.flush()?;

    Ok(out.written)
}

/// Write the board to `path`, creating or truncating the file.
pub fn write_board_to_path(path: &Path) -> Result<(), CliError> {
    let bytes = write_to_path(path, |out| chess::write_board(out))?;

    tracing::debug!("Wrote {} bytes of board markup to {:?}", bytes, path);
    Ok(())
}

/// Write the board to the configured destination, stdout when `path` is `None`.
pub fn write_board(path: Option<PathBuf>) -> Result<(), CliError> {
    match path {
        Some(path) => write_board_to_path(&path),
        None => {
            let bytes = write_to_stdout(|out| chess::write_board(out))?;
            tracing::debug!("Wrote {} bytes of board markup to stdout", bytes);
            Ok(())
        }
    }
}

/// Describe one square on a single line for the `square` subcommand.
pub fn describe_square<W: Write>(out: &mut W, square: chess::Square) -> io::Result<()> {
    let (rank, file) = square.coordinates();
    writeln!(
        out,
        "{square} id={} coords={rank},{file} shade={}",
        square.element_id(),
        square.shade()
    )
}

/// Write the square description to the configured destination, stdout when
/// `path` is `None`.
pub fn write_square(path: Option<PathBuf>, square: chess::Square) -> Result<(), CliError> {
    let bytes = match &path {
        Some(path) => write_to_path(path, |out| describe_square(out, square))?,
        None => write_to_stdout(|out| describe_square(out, square))?,
    };

    tracing::debug!("Wrote {} bytes describing {} to {:?}", bytes, square, path);
    Ok(())
}
