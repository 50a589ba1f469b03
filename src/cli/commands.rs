use super::{print, Cli, Commands};
use anyhow::Result;
use dialoguer::{Confirm, Input};
use kantan::{
    config::{init_app, AppPaths, KantanConfig},
    BoardName, BoardRegistry,
};
use std::str::FromStr;

/// Everything a board command needs once the app is initialized
struct Context {
    config: KantanConfig,
    registry: BoardRegistry,
}

impl Context {
    async fn load(paths: &AppPaths) -> Result<Self> {
        let config = KantanConfig::load(&paths.config_file).await?;
        let registry = BoardRegistry::from_config(&config, paths);
        Ok(Self { config, registry })
    }

    /// Parses a board name, falling back to the configured default
    fn board_name(&self, name: Option<String>) -> Result<BoardName> {
        match name {
            Some(name) => Ok(BoardName::from_str(&name)?),
            None => Ok(self.config.default_board.clone()),
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let paths = AppPaths::discover()?;

    match cli.command {
        Commands::Init { name } => init(&paths, name).await,
        Commands::Add { title, board, tags } => {
            let ctx = Context::load(&paths).await?;
            let name = ctx.board_name(board)?;
            let card = ctx.registry.open(&name)?.add(title.as_slice(), &tags).await?;
            print::success(&format!(
                "Card: \"{}\" was added to board {}",
                card.title, name
            ));
            Ok(())
        }
        Commands::Mv { src, dst, id } => {
            let ctx = Context::load(&paths).await?;
            let src = ctx.board_name(src)?;
            let dst = ctx.board_name(dst)?;
            let card = ctx.registry.move_card(&src, id, &dst).await?;
            print::success(&format!(
                "Card #{}: \"{}\" was moved from board {} to board {}",
                id, card.title, src, dst
            ));
            Ok(())
        }
        Commands::List {
            board,
            show_date,
            show_tags,
        } => {
            let ctx = Context::load(&paths).await?;
            let name = ctx.board_name(board)?;
            let cards = ctx.registry.open(&name)?.cards().await?;
            if cards.is_empty() {
                print::info(&format!("There are no cards in the board \"{}\" yet", name));
                return Ok(());
            }
            print::card_table(&name, &cards, show_date, show_tags);
            Ok(())
        }
        Commands::Remove { board, id, force } => {
            let ctx = Context::load(&paths).await?;
            let name = ctx.board_name(board)?;
            let board = ctx.registry.open(&name)?;

            if !force {
                let card = board.get(id).await?;
                let prompt = format!("Delete card #{}: \"{}\" from board {}?", id, card.title, name);
                if !confirm(&prompt)? {
                    println!("Operation canceled");
                    return Ok(());
                }
            }

            let card = board.remove(id).await?;
            print::success(&format!(
                "Card #{}: \"{}\" was removed from board {}",
                id, card.title, name
            ));
            Ok(())
        }
        Commands::Clear { board, force } => {
            let ctx = Context::load(&paths).await?;
            let name = ctx.board_name(board)?;
            let board = ctx.registry.open(&name)?;

            if !force && !confirm(&format!("Delete all cards from board {}?", name))? {
                println!("Operation canceled");
                return Ok(());
            }

            board.remove_all().await?;
            print::success(&format!("All cards were removed from board \"{}\"", name));
            Ok(())
        }
        Commands::Boards => {
            let ctx = Context::load(&paths).await?;
            let names = ctx.registry.board_names().await?;
            if names.is_empty() {
                print::info("There are no boards yet");
            }
            for name in names {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

async fn init(paths: &AppPaths, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("board name?")
            .default(BoardName::DEFAULT.to_string())
            .interact_text()?,
    };
    let name = BoardName::from_str(&name)?;

    let config = init_app(paths).await?;
    let registry = BoardRegistry::from_config(&config, paths);
    let path = registry.init_board(&name).await?;

    print::success(&format!("The board database is {}", path.display()));
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
