use std::io::{self, Read, Write};

use flate2::{Compression, GzBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Read granularity for [`chunked_gzip`]. Keeps memory flat no matter how
/// large the raw logs are.
pub const GZIP_CHUNK_SIZE: usize = 8192;

/// Gzip `input` into `output` one chunk at a time, rendering a progress bar
/// labelled with `filename` while data flows. `size_hint` gives the bar a
/// total when the caller knows the input length up front.
///
/// `filename` is also embedded as the gzip member name, so it must not
/// contain a NUL byte. Returns the number of raw bytes compressed.
pub fn chunked_gzip<R: Read, W: Write>(
    input: &mut R,
    output: W,
    filename: &str,
    size_hint: Option<u64>,
) -> io::Result<u64> {
    let pb = match size_hint {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner} Gzipping {msg}: [{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes}",
                    )
                    .unwrap()
                    .progress_chars("█░ "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} Gzipping {msg}: {bytes} gzipped")
                    .unwrap(),
            );
            pb
        }
    };
    pb.set_message(filename.to_string());

    let mut gz = GzBuilder::new()
        .filename(filename)
        .write(output, Compression::default());

    let mut buffer = [0u8; GZIP_CHUNK_SIZE];
    let mut read_size = 0u64;

    loop {
        let bytes_read = input.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        gz.write_all(&buffer[..bytes_read])?;
        read_size += bytes_read as u64;
        pb.set_position(read_size);
    }

    gz.finish()?;
    pb.finish_and_clear();
    debug!("gzipped {} bytes of {}", read_size, filename);

    Ok(read_size)
}
