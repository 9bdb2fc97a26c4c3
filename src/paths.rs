use std::env;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Resolve a configuration path the way the config layer expects:
/// `~/…` expands against `$HOME`, absolute paths pass through, and
/// relative paths are anchored at `base_path` when one is given
/// (dropping a leading `./`) or left alone otherwise.
pub fn normalize_path(path: &str, base_path: Option<&Path>) -> PathBuf {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = env::var_os("HOME") {
            let rest = path.trim_start_matches('~').trim_start_matches('/');
            return PathBuf::from(home).join(rest);
        }
    }

    let path_buf = Path::new(path);
    if path_buf.is_absolute() {
        return path_buf.to_path_buf();
    }

    match base_path {
        Some(base) => base.join(path.strip_prefix("./").unwrap_or(path)),
        None => path_buf.to_path_buf(),
    }
}

/// Open a resource given as a plain path or a `file:` URL.
pub fn open_resource(path: &str) -> io::Result<File> {
    let path = path
        .strip_prefix("file://")
        .or_else(|| path.strip_prefix("file:"))
        .unwrap_or(path);
    File::open(path)
}

#[derive(Clone, Copy, Debug)]
pub enum StdStream {
    Stdin,
    Stdout,
    Stderr,
}

/// Whether the given standard stream is redirected away from a terminal.
pub fn is_redirected(stream: StdStream) -> bool {
    match stream {
        StdStream::Stdin => !io::stdin().is_terminal(),
        StdStream::Stdout => !io::stdout().is_terminal(),
        StdStream::Stderr => !io::stderr().is_terminal(),
    }
}
