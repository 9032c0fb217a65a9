mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::process;

use adapter::report;
use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{AppCommand, ConnectOptions, DescriptionSource, OutputFormat};
use ports::inbound::UseCaseRunner;
use usecase::{AnalyzerUseCase, SessionState};
use wiring::{wire_app, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, command: AppCommand) -> Result<i32, Error> {
        let command_name = cmd_name_for_log(&command);
        self.log(
            LogRecord::new(LogLevel::Info, "command started")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match command {
            AppCommand::Help => {
                print_help();
                Ok(0)
            }
            AppCommand::ListProfiles => {
                let analyzer = self.app.analyzer(Default::default(), None);
                let (names, default) = analyzer.list_profiles()?;
                for name in &names {
                    if default.as_deref() == Some(name.as_str()) {
                        println!("{} (default)", name);
                    } else {
                        println!("{}", name);
                    }
                }
                Ok(0)
            }
            AppCommand::Analyze {
                connect,
                source,
                format,
                output,
            } => self.run_once(connect, source, format, output.as_deref()),
            AppCommand::Interactive { connect, format } => self.run_interactive(connect, format),
        };

        let code = result.as_ref().copied().unwrap_or(0);
        self.log(
            LogRecord::new(LogLevel::Info, "command finished")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::new(LogLevel::Error, e.to_string()).kind("error"));
        }
        result
    }
}

impl Runner {
    /// 1 回だけ分析して stdout（または --output）に出す
    fn run_once(
        &self,
        connect: ConnectOptions,
        source: DescriptionSource,
        format: OutputFormat,
        output: Option<&Path>,
    ) -> Result<i32, Error> {
        let description = match source {
            DescriptionSource::Inline(text) => text,
            DescriptionSource::File(path) => self.app.fs.read_to_string(&path)?,
        };
        let (analyzer, credential) = self.prepare(connect)?;

        let mut session = SessionState::new();
        analyzer.connect(&mut session, credential.as_deref().unwrap_or(""))?;
        let result = analyzer.analyze(&mut session, &description)?;
        let rendered = report::render(result, format)?;

        match output {
            Some(path) => {
                self.app.fs.write(path, &rendered)?;
                eprintln!("Wrote analysis to {}", path.display());
            }
            None => print!("{}", rendered),
        }
        Ok(0)
    }

    /// 対話セッション: キーを 1 度だけ受け取り、説明を読んでは分析する
    fn run_interactive(&self, connect: ConnectOptions, format: OutputFormat) -> Result<i32, Error> {
        let (analyzer, credential) = self.prepare(connect)?;
        let credential = match credential {
            Some(key) => key,
            None => match self.prompt_api_key()? {
                Some(key) => key,
                None => return Ok(0),
            },
        };

        let mut session = SessionState::new();
        analyzer.connect(&mut session, &credential)?;
        eprintln!("Enter a product description (/show to redisplay the last result, /quit to exit).");

        while let Some(line) = self.app.line_input.read_line("product> ")? {
            match line.trim() {
                "/quit" | "/exit" => break,
                "/show" => match session.result() {
                    Some(result) => print!("{}", report::render(result, format)?),
                    None => eprintln!("No analysis yet."),
                },
                _ => match analyzer.analyze(&mut session, &line) {
                    Ok(result) => print!("{}", report::render(result, format)?),
                    Err(e) => eprintln!("Error during analysis: {}", e),
                },
            }
        }
        Ok(0)
    }

    /// 空でないキーが入力されるまで聞き直す。EOF なら None。
    fn prompt_api_key(&self) -> Result<Option<String>, Error> {
        while let Some(line) = self.app.line_input.read_line("OpenAI API key: ")? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
            eprintln!("Please enter your OpenAI API key to begin.");
        }
        Ok(None)
    }

    /// プロファイルを解決し、use case と API キー（-k → プロファイルの環境変数）を返す
    fn prepare(&self, connect: ConnectOptions) -> Result<(AnalyzerUseCase, Option<String>), Error> {
        let resolved = self.app.resolve_profile(&connect)?;
        self.log(
            LogRecord::new(LogLevel::Debug, "profile resolved")
                .kind("config")
                .field("profile", resolved.profile_name.as_str())
                .field("provider", resolved.provider_type().as_str()),
        );
        let credential = connect
            .api_key
            .or_else(|| self.app.env_resolver.var(resolved.api_key_env()));
        Ok((self.app.analyzer(resolved, connect.model), credential))
    }

    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }
}

fn cmd_name_for_log(cmd: &AppCommand) -> &'static str {
    match cmd {
        AppCommand::Help => "help",
        AppCommand::ListProfiles => "list-profiles",
        AppCommand::Analyze { .. } => "analyze",
        AppCommand::Interactive { .. } => "interactive",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("profitdna: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_app(config.verbose);
    let command = config_to_command(config)?;
    let runner = Runner { app };
    runner.run(command)
}

fn print_usage() {
    eprintln!("Usage: profitdna [options] <product description...>");
}

fn print_help() {
    println!("Usage: profitdna [options] <product description...>");
    println!("       profitdna -i [options]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -L, --list-profiles           List currently available provider profiles (from profiles.json + built-ins)");
    println!("  -i, --interactive             Interactive session: enter descriptions one per line; /show, /quit");
    println!("  -f, --file <path>             Read the product description from a file");
    println!("  -k, --api-key <key>           API key. Default: the profile's api_key_env (OPENAI_API_KEY)");
    println!("  -p, --profile <profile>       Specify LLM profile (openai, echo, etc.). Default: profiles.json default, or openai");
    println!("  -m, --model <model>           Specify model name. Default: profile model, or gpt-4o");
    println!("  --json                        Print the result as JSON (revenue_analysis, implementation_plan, profit_summary)");
    println!("  -o, --output <path>           Write the result to a file instead of stdout");
    println!("  -v, --verbose                 Emit verbose debug logs to stderr");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY    API key for the default openai profile");
    println!("  PROFITDNA_HOME    Home directory. Profiles: $PROFITDNA_HOME/profiles.json; log: $PROFITDNA_HOME/logs/profitdna.jsonl");
    println!("                    If unset, $XDG_CONFIG_HOME/profitdna (e.g. ~/.config/profitdna) is used.");
    println!();
    println!("Description:");
    println!("  Runs three analysis stages in order (revenue strategy, implementation plan, profit summary).");
    println!("  Each stage receives the product description and the output of the earlier stages.");
    println!();
    println!("Examples:");
    println!("  profitdna A subscription meal-planning app for families");
    println!("  profitdna -f product.txt --json -o analysis.json");
    println!("  profitdna -p echo -k dummy Project management tool for freelancers");
    println!("  profitdna -i");
}
