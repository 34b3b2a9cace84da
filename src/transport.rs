use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Fatal failures of the line transport. Bad guesses are never errors.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("input closed before the number was guessed")]
    InputClosed,
    #[error("failed to read line (error: {0})")]
    Read(#[source] io::Error),
    #[error("failed to write line (error: {0})")]
    Write(#[source] io::Error),
}

/// Reads one line without its terminator. Bytes that are not UTF-8 are kept
/// as replacement characters so they fail parsing instead of the session.
pub async fn read_line<R>(input: &mut R) -> Result<String, GameError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buffer = Vec::new();
    let read = input
        .read_until(b'\n', &mut buffer)
        .await
        .map_err(GameError::Read)?;
    if read == 0 {
        return Err(GameError::InputClosed);
    }

    if buffer.ends_with(b"\n") {
        buffer.pop();
        if buffer.ends_with(b"\r") {
            buffer.pop();
        }
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub async fn write_line<W>(output: &mut W, line: &str) -> Result<(), GameError>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(line.as_bytes())
        .await
        .map_err(GameError::Write)?;
    output.write_all(b"\n").await.map_err(GameError::Write)?;
    output.flush().await.map_err(GameError::Write)
}
