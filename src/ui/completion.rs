//! Shell completion generation and installation for empviz

use clap::{Command, CommandFactory};
use clap_complete::{Generator, Shell, generate};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{EmpvizError, Result};
use crate::ui::cli::Cli;

const BIN_NAME: &str = "empviz";

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    generate(
        generator,
        app,
        app.get_name().to_string(),
        &mut std::io::stdout(),
    );
}

/// Install shell completion under the user's home directory.
///
/// Returns setup instructions to show the user.
pub fn install_completion(shell: Shell) -> Result<String> {
    let home = std::env::var("HOME")
        .map_err(|_| EmpvizError::Config("HOME environment variable not set".to_string()))?;
    install_completion_in(shell, Path::new(&home))
}

/// Install shell completion relative to `home`
pub fn install_completion_in(shell: Shell, home: &Path) -> Result<String> {
    let completion_dir = completion_directory(shell, home)?;
    let completion_path = completion_dir.join(completion_filename(shell));

    fs::write(&completion_path, generate_completion_script(shell)?)?;

    let instructions = setup_instructions(shell, &completion_path);
    Ok(format!(
        "✓ Shell completion installed successfully!\n\n{instructions}"
    ))
}

/// Pick (and create) the completion directory for `shell`.
///
/// The first candidate whose parent already exists wins; otherwise the first
/// candidate is created.
fn completion_directory(shell: Shell, home: &Path) -> Result<PathBuf> {
    let candidates: Vec<PathBuf> = match shell {
        Shell::Bash => vec![
            home.join(".local/share/bash-completion/completions"),
            home.join(".bash_completion.d"),
        ],
        Shell::Zsh => vec![
            home.join(".local/share/zsh/site-functions"),
            home.join(".zsh/completions"),
        ],
        Shell::Fish => vec![home.join(".config/fish/completions")],
        Shell::PowerShell | Shell::Elvish => {
            return Err(EmpvizError::InvalidArgument(format!(
                "{shell} completion installation not supported. Use '{BIN_NAME} completion-generate {shell}' and add it to your profile manually."
            )));
        }
        _ => {
            return Err(EmpvizError::InvalidArgument(format!(
                "Unsupported shell: {shell:?}"
            )));
        }
    };

    let chosen = candidates
        .iter()
        .find(|dir| dir.parent().is_some_and(Path::exists))
        .unwrap_or(&candidates[0])
        .clone();
    fs::create_dir_all(&chosen)?;
    Ok(chosen)
}

fn completion_filename(shell: Shell) -> String {
    match shell {
        Shell::Zsh => format!("_{BIN_NAME}"),
        Shell::Fish => format!("{BIN_NAME}.fish"),
        _ => BIN_NAME.to_string(),
    }
}

fn generate_completion_script(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buf);

    String::from_utf8(buf).map_err(|e| {
        EmpvizError::InvalidArgument(format!("Failed to generate completion script: {e}"))
    })
}

fn setup_instructions(shell: Shell, completion_path: &Path) -> String {
    match shell {
        Shell::Bash => format!(
            "Completion installed to: {}\n\n\
            To enable bash completions, add this to your ~/.bashrc:\n\
            for completion in ~/.local/share/bash-completion/completions/*; do\n\
                [[ -r \"$completion\" ]] && source \"$completion\"\n\
            done\n\n\
            Then restart your shell or run: source ~/.bashrc",
            completion_path.display()
        ),
        Shell::Zsh => format!(
            "Completion installed to: {}\n\n\
            To enable zsh completions, add this to your ~/.zshrc:\n\
            fpath=(~/.local/share/zsh/site-functions $fpath)\n\
            autoload -U compinit && compinit\n\n\
            You may also need to clear the completion cache: rm -f ~/.zcompdump*",
            completion_path.display()
        ),
        Shell::Fish => format!(
            "Completion installed to: {}\n\n\
            Fish loads completions from ~/.config/fish/completions/ automatically.",
            completion_path.display()
        ),
        _ => format!("Completion installed to: {}", completion_path.display()),
    }
}
