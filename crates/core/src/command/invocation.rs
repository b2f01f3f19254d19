use crate::registry::TestCase;
use std::path::{Path, PathBuf};
use std::process::Command;

/// An external command: the verifier for a case, or the verifier's build step.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
        }
    }

    /// `<verifier> --default-unwind <N> --check-contract <function>/<harness> <test_file>`
    pub fn verifier(verifier: &str, unwind: u32, case: &TestCase, test_file: &Path) -> Self {
        Self::new(
            verifier,
            vec![
                "--default-unwind".to_string(),
                unwind.to_string(),
                "--check-contract".to_string(),
                case.contract_target(),
                test_file.display().to_string(),
            ],
        )
    }

    /// Split a configured argv (`["cargo", "build-dev"]`) into an invocation.
    /// Returns `None` for an empty argv.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.program);
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        cmd
    }
}

/// Single-quote `arg` unless every character is shell-inert, so the echoed
/// line can be pasted back into a POSIX shell.
fn quote(arg: &str) -> String {
    let inert = |c: char| c.is_ascii_alphanumeric() || "_-./:=,+@%".contains(c);
    if !arg.is_empty() && arg.chars().all(inert) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verifier_invocation_layout() {
        let case = TestCase::new("VecMap::<u8, u8>::clear", "contract_harnesses::clear");
        let invocation = Invocation::verifier("kani", 8, &case, Path::new("vec_map.rs"));

        assert_eq!(invocation.program, "kani");
        assert_eq!(
            invocation.args,
            vec![
                "--default-unwind",
                "8",
                "--check-contract",
                "VecMap::<u8, u8>::clear/contract_harnesses::clear",
                "vec_map.rs",
            ]
        );
    }

    #[test]
    fn test_shell_command_quotes_spaced_arguments() {
        let case = TestCase::new("VecMap::<u8, u8>::new", "contract_harnesses::new_1");
        let invocation = Invocation::verifier("kani", 4, &case, Path::new("fixme_vec_map_example.rs"));

        assert_eq!(
            invocation.to_shell_command(),
            "kani --default-unwind 4 --check-contract 'VecMap::<u8, u8>::new/contract_harnesses::new_1' fixme_vec_map_example.rs"
        );
    }

    #[test]
    fn test_shell_command_quotes_metacharacters() {
        let invocation = Invocation::new(
            "kani",
            vec![
                "it's; rm -rf $HOME.rs".to_string(),
                "a|b".to_string(),
                String::new(),
                "--default-unwind=8".to_string(),
            ],
        );
        assert_eq!(
            invocation.to_shell_command(),
            r"kani 'it'\''s; rm -rf $HOME.rs' 'a|b' '' --default-unwind=8"
        );
    }

    #[test]
    fn test_from_argv() {
        let argv = vec!["cargo".to_string(), "build-dev".to_string()];
        let invocation = Invocation::from_argv(&argv).unwrap().with_working_dir("/tmp");
        assert_eq!(invocation.program, "cargo");
        assert_eq!(invocation.args, vec!["build-dev"]);
        assert_eq!(invocation.working_dir, Some(PathBuf::from("/tmp")));
        assert!(Invocation::from_argv(&[]).is_none());
    }
}
