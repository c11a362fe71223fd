use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::runtime::ProcessRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Exit(i32),
    Killed,
    Missing,
}

/// Records every spawn instead of running anything
pub struct FakeRunner {
    behavior: Behavior,
    version: String,
    inherited: Mutex<Vec<InheritedCall>>,
    captured: Mutex<Vec<String>>,
}

impl FakeRunner {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            version: "1.0.0".to_string(),
            inherited: Mutex::new(Vec::new()),
            captured: Mutex::new(Vec::new()),
        }
    }

    /// Every process exits with `code`; version probes succeed
    pub fn exiting(code: i32) -> Self {
        Self::with_behavior(Behavior::Exit(code))
    }

    /// Install processes die from a signal
    pub fn killed() -> Self {
        Self::with_behavior(Behavior::Killed)
    }

    /// No program can be found
    pub fn missing() -> Self {
        Self::with_behavior(Behavior::Missing)
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn inherited_calls(&self) -> Vec<InheritedCall> {
        self.inherited.lock().unwrap().clone()
    }

    pub fn captured_calls(&self) -> Vec<String> {
        self.captured.lock().unwrap().clone()
    }

    pub fn spawn_count(&self) -> usize {
        self.inherited.lock().unwrap().len() + self.captured.lock().unwrap().len()
    }
}

impl ProcessRunner for FakeRunner {
    async fn run_inherited(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> io::Result<Option<i32>> {
        self.inherited.lock().unwrap().push(InheritedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });

        match self.behavior {
            Behavior::Exit(code) => Ok(Some(code)),
            Behavior::Killed => Ok(None),
            Behavior::Missing => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    async fn capture(&self, program: &str, args: &[&str]) -> io::Result<Option<String>> {
        let mut line = vec![program];
        line.extend_from_slice(args);
        self.captured.lock().unwrap().push(line.join(" "));

        match self.behavior {
            Behavior::Missing => Err(io::Error::from(io::ErrorKind::NotFound)),
            _ => Ok(Some(self.version.clone())),
        }
    }
}
