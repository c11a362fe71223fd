use std::collections::VecDeque;
use std::io;

use crate::collector::Prompter;
use crate::config::{PackageManager, ValidationError};
use crate::pipeline::{Reporter, Summary};

/// One scripted reply to a prompt
#[derive(Debug, Clone)]
pub enum Answer {
    Name(&'static str),
    Manager(PackageManager),
    Install(bool),
    /// The user pressed Esc or Ctrl-C
    Cancel,
}

/// Replays answers in order and records everything shown to the user
#[derive(Default)]
pub struct ScriptedUi {
    answers: VecDeque<Answer>,
    asked: Vec<&'static str>,
    name_defaults: Vec<String>,
    rejections: Vec<(String, ValidationError)>,
    infos: Vec<String>,
    warnings: Vec<String>,
    summaries: usize,
}

impl ScriptedUi {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn asked(&self) -> Vec<&'static str> {
        self.asked.clone()
    }

    pub fn name_defaults(&self) -> Vec<String> {
        self.name_defaults.clone()
    }

    pub fn rejections(&self) -> Vec<(String, ValidationError)> {
        self.rejections.clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }

    pub fn summaries(&self) -> usize {
        self.summaries
    }

    fn next(&mut self, prompt: &'static str) -> io::Result<Answer> {
        self.asked.push(prompt);
        match self.answers.pop_front() {
            Some(Answer::Cancel) => Err(io::Error::from(io::ErrorKind::Interrupted)),
            Some(answer) => Ok(answer),
            None => panic!("no scripted answer left for the {prompt} prompt"),
        }
    }
}

impl Prompter for ScriptedUi {
    fn project_name(&mut self, default: &str) -> io::Result<String> {
        self.name_defaults.push(default.to_string());
        match self.next("name")? {
            Answer::Name(name) => Ok(name.to_string()),
            other => panic!("expected a name answer, got {other:?}"),
        }
    }

    fn package_manager(&mut self, _default: PackageManager) -> io::Result<PackageManager> {
        match self.next("package_manager")? {
            Answer::Manager(pm) => Ok(pm),
            other => panic!("expected a package manager answer, got {other:?}"),
        }
    }

    fn install_deps(&mut self, _package_manager: PackageManager) -> io::Result<bool> {
        match self.next("install")? {
            Answer::Install(install) => Ok(install),
            other => panic!("expected an install answer, got {other:?}"),
        }
    }

    fn invalid_name(&mut self, name: &str, error: &ValidationError) -> io::Result<()> {
        self.rejections.push((name.to_string(), error.clone()));
        Ok(())
    }
}

impl Reporter for ScriptedUi {
    fn info(&mut self, message: &str) -> io::Result<()> {
        self.infos.push(message.to_string());
        Ok(())
    }

    fn success(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        self.warnings.push(message.to_string());
        Ok(())
    }

    fn start_progress(&mut self, _message: &str) {}

    fn stop_progress(&mut self, _message: &str) {}

    fn summary(&mut self, _summary: &Summary) -> io::Result<()> {
        self.summaries += 1;
        Ok(())
    }
}
