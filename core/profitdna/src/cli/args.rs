use crate::domain::{AppCommand, ConnectOptions, DescriptionSource, OutputFormat};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use std::path::PathBuf;

pub const BIN_NAME: &str = "profitdna";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -L / --list-profiles: 現在有効なプロファイル一覧を表示
    pub list_profiles: bool,
    /// -i / --interactive: 対話セッション（説明を繰り返し入力して分析）
    pub interactive: bool,
    /// --json: 結果を JSON で出力する
    pub json: bool,
    /// -v / --verbose: 不具合調査用の冗長ログを stderr に出力する
    pub verbose: bool,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// -k / --api-key（未指定ならプロファイルの api_key_env から読む）
    pub api_key: Option<String>,
    /// -f / --file: 商品説明をファイルから読む
    pub file: Option<PathBuf>,
    /// -o / --output: 結果をファイルに書く
    pub output: Option<PathBuf>,
    pub description_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new(BIN_NAME)
        .about("Generate a revenue, implementation and profit analysis for a product description")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-profiles")
                .short('L')
                .long("list-profiles")
                .help("List currently available provider profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start an interactive session (/show redisplays the last result, /quit exits)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print the result as JSON instead of Markdown")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (openai, echo, etc.)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gpt-4o)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("key")
                .help("API key (default: the profile's api_key_env, OPENAI_API_KEY)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("file")
                .short('f')
                .long("file")
                .value_name("path")
                .help("Read the product description from a file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Write the result to a file instead of stdout")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("Product description words")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        list_profiles: matches.get_flag("list-profiles"),
        interactive: matches.get_flag("interactive"),
        json: matches.get_flag("json"),
        verbose: matches.get_flag("verbose"),
        profile: matches
            .get_one::<String>("profile")
            .map(|s| ProviderName::new(s.clone())),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        api_key: matches.get_one::<String>("api-key").cloned(),
        file: matches.get_one::<PathBuf>("file").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        description_args: matches
            .get_many::<String>("positional")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}

/// Config を AppCommand に変換する
///
/// 説明の指定が矛盾している（位置引数と --file の併用など）ときは usage エラー。
pub fn config_to_command(config: Config) -> Result<AppCommand, Error> {
    if config.help {
        return Ok(AppCommand::Help);
    }

    if config.list_profiles {
        return Ok(AppCommand::ListProfiles);
    }

    let connect = ConnectOptions {
        profile: config.profile,
        model: config.model,
        api_key: config.api_key,
    };
    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Markdown
    };
    let has_words = !config.description_args.is_empty();

    if config.interactive {
        if has_words || config.file.is_some() {
            return Err(Error::invalid_argument(
                "--interactive reads descriptions from stdin; do not pass a description or --file",
            ));
        }
        if config.output.is_some() {
            return Err(Error::invalid_argument(
                "--output cannot be used with --interactive",
            ));
        }
        return Ok(AppCommand::Interactive { connect, format });
    }

    let source = match (config.file, has_words) {
        (Some(_), true) => {
            return Err(Error::invalid_argument(
                "Pass the description either as arguments or with --file, not both",
            ))
        }
        (Some(path), false) => DescriptionSource::File(path),
        (None, true) => DescriptionSource::Inline(config.description_args.join(" ")),
        (None, false) => {
            return Err(Error::invalid_argument("Please enter a product description."))
        }
    };

    Ok(AppCommand::Analyze {
        connect,
        source,
        format,
        output: config.output,
    })
}
