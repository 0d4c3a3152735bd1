use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use seqpad::api::{
    CmdMessage, CmdResult, ConfigAction, MessageLevel, SeqpadApi, SmartPageOptions,
};
use seqpad::config::{SeqpadConfig, KEYS};
use seqpad::error::{Result, SeqpadError};
use seqpad::logging;
use seqpad::model::{PageContext, Template, TemplateSource};
use seqpad::outline::render_outline;
use seqpad::store::fs::FileStore;
use serde::Serialize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SeqpadApi<FileStore>,
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Init => handle_init(&mut ctx),
        Commands::Context { title } => handle_context(&ctx, &title),
        Commands::Outline { title } => handle_outline(&ctx, &title),
        Commands::Templates => handle_templates(&ctx),
        Commands::Template { name } => handle_template(&ctx, &name),
        Commands::Smart {
            title,
            content,
            template,
            raw,
            overwrite,
        } => {
            let options = SmartPageOptions {
                template,
                preserve_structure: !raw,
                overwrite,
            };
            handle_smart(&mut ctx, &title, content, &options)
        }
        Commands::Create {
            title,
            content,
            overwrite,
        } => {
            let content = read_content(content)?;
            let result = ctx.api.create_page(&title, &content, overwrite)?;
            print_written(&ctx, &result)
        }
        Commands::Update {
            title,
            content,
            replace,
        } => {
            let content = read_content(content)?;
            let result = ctx.api.update_page(&title, &content, !replace)?;
            print_written(&ctx, &result)
        }
        Commands::Journal { content, date } => {
            let content = read_content(content)?;
            let result = ctx.api.create_journal_entry(&content, date.as_deref())?;
            print_written(&ctx, &result)
        }
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.graph {
        Some(path) => path.clone(),
        None => default_graph_root()?,
    };

    let config = match SeqpadConfig::load(&root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring unreadable config: {}", e);
            SeqpadConfig::default()
        }
    };
    logging::init(logging::fallback_level(
        cli.verbose,
        config.log_level_filter(),
    ));
    log::debug!("[cli] graph root {}", root.display());

    let store = FileStore::new(root.clone());
    let api = SeqpadApi::new(store, config.layout(), root);

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

fn default_graph_root() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "seqpad", "seqpad")
        .ok_or_else(|| SeqpadError::Config("Could not determine data dir".into()))?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Content from the argument, or stdin when omitted or `-`.
fn read_content(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        arg => {
            let stdin = io::stdin();
            if arg.is_none() && stdin.is_terminal() {
                return Err(SeqpadError::Api(
                    "No content given (pass it as an argument or pipe it in)".into(),
                ));
            }
            let text = io::read_to_string(stdin)?;
            Ok(text.trim_end_matches('\n').to_string())
        }
    }
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_context(ctx: &AppContext, title: &str) -> Result<()> {
    let result = ctx.api.page_context(title)?;
    match &result.context {
        Some(context) if ctx.json => print_json(context)?,
        Some(context) => print_context(context),
        None if ctx.json => println!("null"),
        None => {}
    }
    if !ctx.json {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_outline(ctx: &AppContext, title: &str) -> Result<()> {
    let result = ctx.api.page_context(title)?;
    match &result.context {
        Some(context) if ctx.json => print_json(&context.tree)?,
        Some(context) => println!("{}", render_outline(&context.tree, 0)),
        None => print_messages(&result.messages),
    }
    Ok(())
}

fn handle_templates(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_templates()?;
    if ctx.json {
        return print_json(&result.template_names);
    }
    for name in &result.template_names {
        println!("{}", name);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_template(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.find_template(name)?;
    match &result.template {
        Some(template) if ctx.json => print_json(template)?,
        Some(template) => print_template(template),
        None if ctx.json => println!("null"),
        None => {}
    }
    if !ctx.json {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_smart(
    ctx: &mut AppContext,
    title: &str,
    content: Option<String>,
    options: &SmartPageOptions,
) -> Result<()> {
    let content = read_content(content)?;
    let result = ctx.api.create_smart_page(title, &content, options)?;
    print_written(ctx, &result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if let (true, Some(config)) = (show_all, &result.config) {
        if ctx.json {
            return print_json(config);
        }
        for key in KEYS {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_written(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        if let Some(written) = &result.written {
            print_json(written)?;
        }
        return Ok(());
    }
    print_messages(&result.messages);
    if let Some(written) = &result.written {
        println!("{}", written.path.display().to_string().dimmed());
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_context(context: &PageContext) {
    let analysis = &context.analysis;
    println!("{}", context.title.bold());
    println!("{}", context.path.display().to_string().dimmed());
    println!();

    if !analysis.properties.is_empty() {
        println!("{}", "Properties".yellow());
        for (key, value) in &analysis.properties {
            println!("  {}:: {}", key, value);
        }
    }
    if !analysis.sections.is_empty() {
        println!("{}", "Sections".yellow());
        for section in &analysis.sections {
            println!("  ## {}", section);
        }
    }

    println!("{}", "Format".yellow());
    println!("  blocks:   {}", analysis.outline.len());
    println!("  lines:    {}", analysis.line_count);
    println!("  indent:   {:?}", analysis.indent_style);
    println!("  todos:    {}", yes_no(analysis.has_todos));
    println!("  tags:     {}", yes_no(analysis.has_tags));
    println!("  links:    {}", yes_no(analysis.has_links));
    println!("  queries:  {}", yes_no(analysis.has_queries));
}

fn print_template(template: &Template) {
    let source = match template.location.source {
        TemplateSource::TemplatesDir => "templates dir",
        TemplateSource::Page => "page",
    };
    println!("{} {}", template.name.bold(), format!("({})", source).dimmed());
    println!("{}", template.location.path.display().to_string().dimmed());

    for (key, value) in &template.structure.properties {
        println!("  {}:: {}", key, value);
    }
    for section in &template.structure.sections {
        println!("  ## {}", section);
    }
}

fn yes_no(flag: bool) -> ColoredString {
    if flag {
        "yes".green()
    } else {
        "no".dimmed()
    }
}
