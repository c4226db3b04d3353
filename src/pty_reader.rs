use std::io::Read;
use std::thread;

/// Spawns a background thread that hands every chunk read from a PTY to `handler`.
pub fn spawn_reader<R, F>(mut reader: R, handler: F)
where
    R: Read + Send + 'static,
    F: Fn(&[u8]) + Send + 'static,
{
    thread::spawn(move || {
        let mut buffer = [0u8; 4096];
        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break, // EOF
                Ok(n) => handler(&buffer[..n]),
                Err(err) => {
                    tracing::debug!(%err, "PTY reader stopped");
                    break;
                }
            }
        }
    });
}
