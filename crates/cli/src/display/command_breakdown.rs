use art_explorer_core::ShellCommand;

pub fn print_command_breakdown(command: &ShellCommand) {
    println!("   🔧 Command breakdown:");
    for line in command_breakdown(command) {
        println!("      • {line}");
    }
}

/// One line per recognised part of a tool command line.
pub fn command_breakdown(command: &ShellCommand) -> Vec<String> {
    let mut lines = vec![format!("tool: {}", command.program)];
    let mut subcommand = Vec::new();

    for arg in &command.args {
        if let Some(module) = arg.strip_prefix("-m=") {
            lines.push(format!("module: {}", module.trim_matches('"')));
        } else if let Some(kind) = arg.strip_prefix("-t=") {
            lines.push(format!("template: {kind}"));
        } else {
            subcommand.push(arg.as_str());
        }
    }

    if !subcommand.is_empty() {
        lines.insert(1, format!("subcommand: {}", subcommand.join(" ")));
    }
    if let Some(ref dir) = command.working_dir {
        lines.push(format!("working dir: {}", dir.display()));
    }
    lines
}
