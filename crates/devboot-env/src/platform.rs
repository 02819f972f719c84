//! Host platform flavours that change venv paths and shell commands

/// The two environment layouts Python's `venv` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux, macOS and other Unix hosts: `bin/python`.
    Posix,
    /// Windows hosts: `Scripts\python.exe`.
    Windows,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Interpreter looked up on PATH when none is configured.
    pub fn default_host_python(self) -> &'static str {
        match self {
            Platform::Posix => "python3",
            Platform::Windows => "python",
        }
    }

    pub(crate) fn bin_dir(self) -> &'static str {
        match self {
            Platform::Posix => "bin",
            Platform::Windows => "Scripts",
        }
    }

    pub(crate) fn python_exe(self) -> &'static str {
        match self {
            Platform::Posix => "python",
            Platform::Windows => "python.exe",
        }
    }

    pub(crate) fn pip_exe(self) -> &'static str {
        match self {
            Platform::Posix => "pip",
            Platform::Windows => "pip.exe",
        }
    }
}
