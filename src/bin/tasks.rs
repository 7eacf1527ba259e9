//! Command line tool to list tasks and to print or check their configs

use anyhow::anyhow;
use burn_nlp_tasks::{
    cli::tasks::TaskName,
    tasks::{RunConfig, TaskConfig},
};
use log::info;
use pico_args::Arguments;

const HELP: &str = "\
Usage: tasks COMMAND [OPTIONS]

Commands:
  list                 List the available tasks
  default TASK         Print a run config with the task's default config
  example TASK         Print a run config with a complete example config for the task
  validate FILE        Load a JSON run config and check it

Options:
  -h, --help           Print help
  --yaml               Print configs as YAML instead of JSON
  -l, --labels         A label file to load with `validate`, one per label target, in order
";

#[derive(Debug)]
enum Command {
    List,
    Default(String),
    Example(String),
    Validate(String, Vec<String>),
}

#[derive(Debug)]
struct Args {
    command: Command,
    yaml: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let yaml = pargs.contains("--yaml");
        let labels: Vec<String> = pargs.values_from_str(["-l", "--labels"])?;

        let command: String = pargs.free_from_str().map_err(|e| match e {
            pico_args::Error::MissingArgument => anyhow!("Missing required argument: COMMAND"),
            _ => anyhow!("{}", e),
        })?;

        let command = match command.as_str() {
            "list" => Command::List,
            "default" => Command::Default(required(&mut pargs, "TASK")?),
            "example" => Command::Example(required(&mut pargs, "TASK")?),
            "validate" => Command::Validate(required(&mut pargs, "FILE")?, labels),
            other => return Err(anyhow!("Unknown command: {}", other)),
        };

        Ok(Some(Args { command, yaml }))
    }
}

fn required(pargs: &mut Arguments, name: &str) -> anyhow::Result<String> {
    pargs.free_from_str().map_err(|e| match e {
        pico_args::Error::MissingArgument => anyhow!("Missing required argument: {}", name),
        _ => anyhow!("{}", e),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    match &args.command {
        Command::List => {
            for task in TaskName::all() {
                if task.has_required_fields() {
                    println!("{} (required fields, see `tasks example {}`)", task, task);
                } else {
                    println!("{}", task);
                }
            }
        }
        Command::Default(name) => {
            let task = TaskName::try_from(name.as_str())?;

            let config = TaskConfig::default_for(task).ok_or_else(|| {
                anyhow!(
                    "{} has required fields and no default, try `tasks example {}`",
                    task,
                    task
                )
            })?;

            print_config(&RunConfig::new(config), args.yaml)?;
        }
        Command::Example(name) => {
            let task = TaskName::try_from(name.as_str())?;

            print_config(&RunConfig::new(TaskConfig::example_for(task)), args.yaml)?;
        }
        Command::Validate(path, labels) => {
            let config = RunConfig::load_validated(path)?;

            info!("Labels: {:?}", config.task.labels());

            if !labels.is_empty() {
                let metas = config.load_target_meta(labels).await?;

                for (label_path, meta) in labels.iter().zip(&metas) {
                    println!("{}: {} labels", label_path, meta.vocab.len());
                }
            }

            println!("{} is a valid {} run config", path, config.task.name());
        }
    }

    Ok(())
}

fn print_config(config: &RunConfig, yaml: bool) -> anyhow::Result<()> {
    let output = if yaml {
        serde_yaml::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };

    println!("{}", output);

    Ok(())
}
