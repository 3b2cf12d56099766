//! Table-driven terminal builtins.
//!
//! Each builtin is a pure function from its invocation (arguments,
//! current directory, history, ports) to a [`CommandOutcome`]; the
//! terminal applies the outcome to its own state. Filesystem failures
//! are rendered as output lines here and never propagate further.

use vesper_fs::shellpath;
use vesper_fs::{FileSystem, VfsError};
use vesper_lib::{BoundedRing, Clock};

use crate::theme::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::{AppCtx, ContentEffect};

/// What one committed command line produced.
pub struct CommandOutcome {
    pub lines: Vec<String>,
    pub new_cwd: Option<String>,
    pub effect: ContentEffect,
    pub clear: bool,
}

impl CommandOutcome {
    fn none() -> Self {
        Self {
            lines: Vec::new(),
            new_cwd: None,
            effect: ContentEffect::None,
            clear: false,
        }
    }

    fn message(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::none()
        }
    }

    fn output(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::none()
        }
    }
}

struct Invocation<'a> {
    args: Vec<&'a str>,
    cwd: &'a str,
    history: &'a BoundedRing<String>,
    fs: &'a mut dyn FileSystem,
    clock: &'a dyn Clock,
}

struct Builtin {
    name: &'static str,
    aliases: &'static [&'static str],
    desc: &'static str,
    run: fn(&mut Invocation<'_>) -> CommandOutcome,
}

static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "help",
        aliases: &[],
        desc: "List available commands",
        run: cmd_help,
    },
    Builtin {
        name: "clear",
        aliases: &["cls"],
        desc: "Clear the terminal",
        run: cmd_clear,
    },
    Builtin {
        name: "echo",
        aliases: &[],
        desc: "Print arguments back to the terminal",
        run: cmd_echo,
    },
    Builtin {
        name: "date",
        aliases: &[],
        desc: "Show current date and time",
        run: cmd_date,
    },
    Builtin {
        name: "time",
        aliases: &[],
        desc: "Show current time",
        run: cmd_time,
    },
    Builtin {
        name: "uptime",
        aliases: &[],
        desc: "Show shell uptime",
        run: cmd_uptime,
    },
    Builtin {
        name: "sysinfo",
        aliases: &[],
        desc: "Show system information",
        run: cmd_sysinfo,
    },
    Builtin {
        name: "version",
        aliases: &["ver"],
        desc: "Show shell version",
        run: cmd_version,
    },
    Builtin {
        name: "about",
        aliases: &[],
        desc: "About this shell",
        run: cmd_about,
    },
    Builtin {
        name: "history",
        aliases: &[],
        desc: "Show command history",
        run: cmd_history,
    },
    Builtin {
        name: "ls",
        aliases: &["dir"],
        desc: "List directory contents",
        run: cmd_ls,
    },
    Builtin {
        name: "cd",
        aliases: &[],
        desc: "Change the current directory",
        run: cmd_cd,
    },
    Builtin {
        name: "cat",
        aliases: &[],
        desc: "Display file contents",
        run: cmd_cat,
    },
    Builtin {
        name: "open",
        aliases: &["see"],
        desc: "Open a text file in the editor",
        run: cmd_open,
    },
    Builtin {
        name: "write",
        aliases: &[],
        desc: "Write text to a file",
        run: cmd_write,
    },
    Builtin {
        name: "mkdir",
        aliases: &[],
        desc: "Create a directory",
        run: cmd_mkdir,
    },
    Builtin {
        name: "rm",
        aliases: &[],
        desc: "Remove a file or empty directory",
        run: cmd_rm,
    },
    Builtin {
        name: "exit",
        aliases: &["quit"],
        desc: "Close the terminal",
        run: cmd_exit,
    },
    Builtin {
        name: "shutdown",
        aliases: &["halt"],
        desc: "Power off the shell",
        run: cmd_shutdown,
    },
];

fn find_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS
        .iter()
        .find(|b| b.name == name || b.aliases.contains(&name))
}

/// Interpret one committed command line against the current directory.
pub fn interpret(
    line: &str,
    cwd: &str,
    history: &BoundedRing<String>,
    ctx: &mut AppCtx<'_>,
) -> CommandOutcome {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(name) = tokens.first() else {
        return CommandOutcome::none();
    };
    let name = name.to_ascii_lowercase();

    match find_builtin(&name) {
        Some(builtin) => {
            let mut inv = Invocation {
                args: tokens[1..].to_vec(),
                cwd,
                history,
                fs: &mut *ctx.fs,
                clock: ctx.clock,
            };
            (builtin.run)(&mut inv)
        }
        None => CommandOutcome::output(vec![
            format!("Unknown command: {name}"),
            "Type 'help' for available commands".to_string(),
        ]),
    }
}

/// Resolve a possibly-relative argument to an absolute directory path
/// in canonical (trailing-separator) form.
fn resolve_dir(cwd: &str, arg: &str) -> String {
    if shellpath::is_absolute(arg) {
        shellpath::ensure_dir(arg)
    } else {
        shellpath::ensure_dir(&shellpath::join(cwd, arg))
    }
}

fn resolve_file(cwd: &str, arg: &str) -> String {
    if shellpath::is_absolute(arg) {
        arg.to_string()
    } else {
        shellpath::join(cwd, arg)
    }
}

fn cmd_help(_inv: &mut Invocation<'_>) -> CommandOutcome {
    let mut lines = vec!["Available commands:".to_string()];
    for b in BUILTINS {
        let name = if b.aliases.is_empty() {
            b.name.to_string()
        } else {
            format!("{}/{}", b.name, b.aliases.join("/"))
        };
        lines.push(format!("  {name:<12} - {}", b.desc));
    }
    CommandOutcome::output(lines)
}

fn cmd_clear(_inv: &mut Invocation<'_>) -> CommandOutcome {
    CommandOutcome {
        clear: true,
        ..CommandOutcome::none()
    }
}

fn cmd_echo(inv: &mut Invocation<'_>) -> CommandOutcome {
    if inv.args.is_empty() {
        CommandOutcome::none()
    } else {
        CommandOutcome::message(inv.args.join(" "))
    }
}

fn cmd_date(inv: &mut Invocation<'_>) -> CommandOutcome {
    let t = inv.clock.wall_time();
    CommandOutcome::output(vec![
        format!("Current date: {}/{}/{}", t.day, t.month, t.year),
        format!("Current time: {:02}:{:02}:{:02}", t.hour, t.minute, t.second),
    ])
}

fn cmd_time(inv: &mut Invocation<'_>) -> CommandOutcome {
    let t = inv.clock.wall_time();
    CommandOutcome::message(format!(
        "Current time: {:02}:{:02}:{:02}",
        t.hour, t.minute, t.second
    ))
}

fn cmd_uptime(inv: &mut Invocation<'_>) -> CommandOutcome {
    let secs = inv.clock.uptime_ms() / 1000;
    CommandOutcome::message(format!(
        "Shell uptime: {}h {}m {}s",
        secs / 3600,
        secs % 3600 / 60,
        secs % 60
    ))
}

fn cmd_sysinfo(inv: &mut Invocation<'_>) -> CommandOutcome {
    let secs = inv.clock.uptime_ms() / 1000;
    CommandOutcome::output(vec![
        format!("Screen resolution: {SCREEN_WIDTH}x{SCREEN_HEIGHT}"),
        format!("Uptime: {secs}s"),
    ])
}

fn cmd_version(_inv: &mut Invocation<'_>) -> CommandOutcome {
    CommandOutcome::message(concat!("Vesper ", env!("CARGO_PKG_VERSION")))
}

fn cmd_about(_inv: &mut Invocation<'_>) -> CommandOutcome {
    CommandOutcome::output(vec![
        format!("Vesper {}", env!("CARGO_PKG_VERSION")),
        "A small cooperative desktop shell".to_string(),
    ])
}

fn cmd_history(inv: &mut Invocation<'_>) -> CommandOutcome {
    let mut lines = vec!["Command history:".to_string()];
    let len = inv.history.len();
    let start = len.saturating_sub(10);
    for i in start..len {
        if let Some(entry) = inv.history.get(i) {
            lines.push(format!("  {}: {entry}", i + 1));
        }
    }
    CommandOutcome::output(lines)
}

fn cmd_ls(inv: &mut Invocation<'_>) -> CommandOutcome {
    let path = match inv.args.first() {
        Some(arg) => resolve_dir(inv.cwd, arg),
        None => inv.cwd.to_string(),
    };

    let entries = match inv.fs.list_dir(&path) {
        Ok(entries) => entries,
        Err(VfsError::NotFound) => {
            return CommandOutcome::message(format!("Directory doesn't exist: {path}"));
        }
        Err(err) => return CommandOutcome::message(format!("List failed: {err}")),
    };

    let mut lines = vec![format!("Directory of {path}"), String::new()];
    let mut dirs = 0usize;
    let mut files = 0usize;
    for entry in &entries {
        if entry.is_dir {
            lines.push(format!(" <DIR>  {}", entry.name));
            dirs += 1;
        } else {
            lines.push(format!("        {}", entry.name));
            files += 1;
        }
    }
    lines.push(String::new());
    lines.push(format!("Total directories: {dirs} | Total files: {files}"));
    CommandOutcome::output(lines)
}

fn cmd_cd(inv: &mut Invocation<'_>) -> CommandOutcome {
    let Some(arg) = inv.args.first() else {
        return CommandOutcome::message("Usage: cd <directory>");
    };

    if *arg == ".." {
        return CommandOutcome {
            new_cwd: Some(shellpath::parent(inv.cwd)),
            ..CommandOutcome::none()
        };
    }

    let target = resolve_dir(inv.cwd, arg);
    if inv.fs.is_dir(&target) {
        CommandOutcome {
            new_cwd: Some(target),
            ..CommandOutcome::none()
        }
    } else {
        CommandOutcome::message(format!("Directory doesn't exist: {target}"))
    }
}

fn cmd_cat(inv: &mut Invocation<'_>) -> CommandOutcome {
    let Some(arg) = inv.args.first() else {
        return CommandOutcome::message("Usage: cat <file>");
    };
    let path = resolve_file(inv.cwd, arg);
    match inv.fs.read_lines(&path) {
        Ok(lines) => CommandOutcome::output(lines),
        Err(VfsError::NotFound) => {
            CommandOutcome::message(format!("File doesn't exist: {path}"))
        }
        Err(err) => CommandOutcome::message(format!("Read failed: {err}")),
    }
}

fn cmd_open(inv: &mut Invocation<'_>) -> CommandOutcome {
    let Some(arg) = inv.args.first() else {
        return CommandOutcome::message("Usage: open <file.txt>");
    };
    let path = resolve_file(inv.cwd, arg);
    if !inv.fs.exists(&path) {
        return CommandOutcome::message(format!("File doesn't exist: {path}"));
    }
    if inv.fs.is_dir(&path) || !path.ends_with(".txt") {
        return CommandOutcome::message(format!("Not a text file: {path}"));
    }
    CommandOutcome {
        effect: ContentEffect::OpenEditor(path),
        ..CommandOutcome::none()
    }
}

fn cmd_write(inv: &mut Invocation<'_>) -> CommandOutcome {
    if inv.args.len() < 2 {
        return CommandOutcome::message("Usage: write <file> <text>");
    }
    let path = resolve_file(inv.cwd, inv.args[0]);
    let text = format!("{}\n", inv.args[1..].join(" "));
    match inv.fs.write_all(&path, &text) {
        Ok(()) => CommandOutcome::none(),
        Err(err) => CommandOutcome::message(format!("Write failed: {err}")),
    }
}

fn cmd_mkdir(inv: &mut Invocation<'_>) -> CommandOutcome {
    let Some(arg) = inv.args.first() else {
        return CommandOutcome::message("Usage: mkdir <directory>");
    };
    let path = resolve_file(inv.cwd, arg);
    match inv.fs.create_dir(&path) {
        Ok(()) => CommandOutcome::none(),
        Err(err) => CommandOutcome::message(format!("mkdir failed: {err}")),
    }
}

fn cmd_rm(inv: &mut Invocation<'_>) -> CommandOutcome {
    let Some(arg) = inv.args.first() else {
        return CommandOutcome::message("Usage: rm <path>");
    };
    let path = resolve_file(inv.cwd, arg);
    match inv.fs.remove(&path) {
        Ok(()) => CommandOutcome::none(),
        Err(err) => CommandOutcome::message(format!("rm failed: {err}")),
    }
}

fn cmd_exit(_inv: &mut Invocation<'_>) -> CommandOutcome {
    CommandOutcome {
        effect: ContentEffect::CloseWindow,
        ..CommandOutcome::none()
    }
}

fn cmd_shutdown(_inv: &mut Invocation<'_>) -> CommandOutcome {
    CommandOutcome {
        lines: vec!["Shutting down...".to_string()],
        effect: ContentEffect::Shutdown,
        ..CommandOutcome::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesper_fs::RamFs;
    use vesper_lib::{ManualClock, WallTime};

    fn run(line: &str, cwd: &str, fs: &mut RamFs) -> CommandOutcome {
        let clock = ManualClock::new();
        clock.set_wall(WallTime {
            year: 2025,
            month: 3,
            day: 9,
            hour: 14,
            minute: 5,
            second: 30,
        });
        let history = BoundedRing::new(4);
        let mut ctx = AppCtx { fs, clock: &clock };
        interpret(line, cwd, &history, &mut ctx)
    }

    #[test]
    fn cd_into_existing_directory_and_back() {
        let mut fs = RamFs::new();
        fs.add_dir("0:\\Documents").unwrap();

        let outcome = run("cd Documents", "0:\\", &mut fs);
        assert_eq!(outcome.new_cwd.as_deref(), Some("0:\\Documents\\"));
        assert!(outcome.lines.is_empty());

        let outcome = run("cd ..", "0:\\Documents\\", &mut fs);
        assert_eq!(outcome.new_cwd.as_deref(), Some("0:\\"));
    }

    #[test]
    fn cd_into_missing_directory_reports_and_keeps_cwd() {
        let mut fs = RamFs::new();
        let outcome = run("cd Documents", "0:\\", &mut fs);
        assert_eq!(outcome.new_cwd, None);
        assert_eq!(outcome.lines, vec!["Directory doesn't exist: 0:\\Documents\\"]);
    }

    #[test]
    fn unknown_command_points_at_help() {
        let mut fs = RamFs::new();
        let outcome = run("frobnicate", "0:\\", &mut fs);
        assert_eq!(outcome.lines[0], "Unknown command: frobnicate");
        assert!(outcome.lines[1].contains("help"));
        assert_eq!(outcome.effect, ContentEffect::None);
    }

    #[test]
    fn ls_counts_directories_and_files() {
        let mut fs = RamFs::new();
        fs.add_dir("0:\\d").unwrap();
        fs.add_file("0:\\a.txt", "x").unwrap();

        let outcome = run("ls", "0:\\", &mut fs);
        assert!(outcome.lines.iter().any(|l| l.contains("<DIR>  d")));
        assert!(
            outcome
                .lines
                .last()
                .unwrap()
                .contains("Total directories: 1 | Total files: 1")
        );
    }

    #[test]
    fn open_spawns_editor_for_text_files_only() {
        let mut fs = RamFs::new();
        fs.add_file("0:\\notes.txt", "hello").unwrap();
        fs.add_file("0:\\blob.bin", "xx").unwrap();

        let outcome = run("open notes.txt", "0:\\", &mut fs);
        assert_eq!(
            outcome.effect,
            ContentEffect::OpenEditor("0:\\notes.txt".to_string())
        );

        let outcome = run("open blob.bin", "0:\\", &mut fs);
        assert_eq!(outcome.effect, ContentEffect::None);
        assert!(outcome.lines[0].starts_with("Not a text file"));

        let outcome = run("open missing.txt", "0:\\", &mut fs);
        assert!(outcome.lines[0].starts_with("File doesn't exist"));
    }

    #[test]
    fn write_then_cat_round_trips() {
        let mut fs = RamFs::new();
        let outcome = run("write note.txt hello from vesper", "0:\\", &mut fs);
        assert!(outcome.lines.is_empty());

        let outcome = run("cat note.txt", "0:\\", &mut fs);
        assert_eq!(outcome.lines, vec!["hello from vesper"]);
    }

    #[test]
    fn date_uses_the_clock_port() {
        let mut fs = RamFs::new();
        let outcome = run("date", "0:\\", &mut fs);
        assert_eq!(outcome.lines[0], "Current date: 9/3/2025");
        assert_eq!(outcome.lines[1], "Current time: 14:05:30");
    }

    #[test]
    fn aliases_resolve_to_the_same_builtin() {
        let mut fs = RamFs::new();
        assert!(run("cls", "0:\\", &mut fs).clear);
        assert_eq!(
            run("quit", "0:\\", &mut fs).effect,
            ContentEffect::CloseWindow
        );
    }
}
