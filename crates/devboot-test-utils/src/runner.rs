//! [`RecordingRunner`]: a scripted stand-in for real child processes.

use std::cell::RefCell;
use std::path::Path;

use devboot_exec::{CommandRunner, Error, Invocation, Outcome, Result, check_outcome};

type Matcher = Box<dyn Fn(&Invocation) -> bool>;
type Effect = Box<dyn Fn(&Invocation) -> Outcome>;

enum Reply {
    Outcome(Outcome),
    NotFound,
    Effect(Effect),
}

struct Rule {
    matcher: Matcher,
    reply: Reply,
}

/// Records invocations and answers them from a list of rules.
///
/// Rules are tried in insertion order; the first match wins. Unmatched
/// invocations succeed with empty output. The invocation's `check` flag is
/// honoured exactly as the real runner does, so a scripted non-zero exit on
/// a checked invocation yields [`Error::Failed`].
///
/// # Example
///
/// ```rust
/// use devboot_exec::{CommandRunner, Invocation, Outcome};
/// use devboot_test_utils::{RecordingRunner, program_is};
///
/// let runner = RecordingRunner::new()
///     .respond(program_is("git"), Outcome::success().with_stdout("/repo\n"));
/// let outcome = runner.run(&Invocation::new("git")).unwrap();
/// assert_eq!(outcome.stdout, "/repo\n");
/// assert_eq!(runner.call_count(), 1);
/// ```
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    rules: Vec<Rule>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer matching invocations with `outcome`.
    pub fn respond(
        mut self,
        matcher: impl Fn(&Invocation) -> bool + 'static,
        outcome: Outcome,
    ) -> Self {
        self.rules.push(Rule {
            matcher: Box::new(matcher),
            reply: Reply::Outcome(outcome),
        });
        self
    }

    /// Pretend the program named `program` is not installed.
    pub fn not_found(mut self, program: &str) -> Self {
        self.rules.push(Rule {
            matcher: Box::new(program_is(program)),
            reply: Reply::NotFound,
        });
        self
    }

    /// Run `effect` for matching invocations, e.g. to create files a real
    /// tool would have created, and answer with its outcome.
    pub fn effect(
        mut self,
        matcher: impl Fn(&Invocation) -> bool + 'static,
        effect: impl Fn(&Invocation) -> Outcome + 'static,
    ) -> Self {
        self.rules.push(Rule {
            matcher: Box::new(matcher),
            reply: Reply::Effect(Box::new(effect)),
        });
        self
    }

    /// Every invocation seen so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Invocations rendered as command lines, for readable assertions.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }

    /// Number of recorded invocations the predicate accepts.
    pub fn count_matching(&self, predicate: impl Fn(&Invocation) -> bool) -> usize {
        self.calls.borrow().iter().filter(|inv| predicate(inv)).count()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<Outcome> {
        self.calls.borrow_mut().push(invocation.clone());

        let rule = self.rules.iter().find(|rule| (rule.matcher)(invocation));
        let outcome = match rule.map(|rule| &rule.reply) {
            None => Outcome::success(),
            Some(Reply::Outcome(outcome)) => outcome.clone(),
            Some(Reply::Effect(effect)) => effect(invocation),
            Some(Reply::NotFound) => {
                return Err(Error::NotFound {
                    program: invocation.program_display(),
                });
            }
        };

        check_outcome(invocation, outcome)
    }
}

/// Matches invocations whose program file name is `name`.
///
/// Works for bare names (`git`) and full paths (`/repo/.venv/bin/python`
/// matches `python`).
pub fn program_is(name: &str) -> impl Fn(&Invocation) -> bool + 'static {
    let name = name.to_string();
    move |inv: &Invocation| {
        let program = inv.program();
        program == Path::new(&name)
            || program.file_name().and_then(|f| f.to_str()) == Some(name.as_str())
    }
}

/// Matches invocations whose arguments contain `needle` as a contiguous run.
pub fn args_contain(needle: &[&str]) -> impl Fn(&Invocation) -> bool + 'static {
    let needle: Vec<String> = needle.iter().map(|s| s.to_string()).collect();
    move |inv: &Invocation| {
        let args = inv.arg_strings();
        !needle.is_empty() && args.windows(needle.len()).any(|w| w == needle.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_invocations_succeed_and_are_recorded() {
        let runner = RecordingRunner::new();
        let outcome = runner.run(&Invocation::new("anything")).unwrap();
        assert!(outcome.is_success());
        assert_eq!(runner.command_lines(), vec!["anything"]);
    }

    #[test]
    fn test_scripted_failure_respects_check_flag() {
        let runner = RecordingRunner::new().respond(program_is("pip"), Outcome::exited(2));

        let err = runner.run(&Invocation::new("pip")).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let outcome = runner.run(&Invocation::new("pip").unchecked()).unwrap();
        assert_eq!(outcome.code, Some(2));
        assert_eq!(runner.call_count(), 2);
    }

    #[test]
    fn test_not_found_rule() {
        let runner = RecordingRunner::new().not_found("git");
        let err = runner.run(&Invocation::new("git")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_program_is_matches_file_name() {
        let matcher = program_is("python");
        assert!(matcher(&Invocation::new("/x/.venv/bin/python")));
        assert!(matcher(&Invocation::new("python")));
        assert!(!matcher(&Invocation::new("python3")));
    }

    #[test]
    fn test_args_contain_requires_contiguous_run() {
        let matcher = args_contain(&["-m", "pip"]);
        assert!(matcher(&Invocation::new("py").args(["-m", "pip", "install"])));
        assert!(!matcher(&Invocation::new("py").args(["-m", "uv", "pip"])));
    }

    #[test]
    fn test_effect_runs_side_effect() {
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        let seen = hits.clone();
        let runner = RecordingRunner::new().effect(program_is("tool"), move |_| {
            seen.set(seen.get() + 1);
            Outcome::success()
        });
        runner.run(&Invocation::new("tool")).unwrap();
        assert_eq!(hits.get(), 1);
    }
}
