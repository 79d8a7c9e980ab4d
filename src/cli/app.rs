use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::style::{StyledContent, Stylize};
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::controllers::{RecipeStore, export_shopping_list, generate_menu, write_shopping_list};
use crate::models::{Recipe, sample_recipes};

const MENU_TEXT: &str = "\nChoose an option:\n1) List recipes\n2) Generate weekly menu\n3) Export shopping list\n4) Add sample data\n5) Exit";
const PROMPT: &str = "> ";

pub enum AppAction {
    Continue, // Show the menu again
    Exit,     // Leave the loop
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListRecipes,
    GenerateMenu,
    ExportShoppingList,
    AddSampleData,
    Exit,
}

impl Command {
    /// Exact match on the option number; no trimming or case folding
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::ListRecipes),
            "2" => Some(Self::GenerateMenu),
            "3" => Some(Self::ExportShoppingList),
            "4" => Some(Self::AddSampleData),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Heading,
    Notice,
    Success,
    Failure,
}

/// The interactive planner: owns the recipe collection for the whole session
pub struct PlannerApp<G> {
    store: RecipeStore,
    shopping_list_path: PathBuf,
    menu_days: usize,
    styled: bool,
    recipes: Vec<Recipe>,
    rng: G,
}

impl<G: Rng> PlannerApp<G> {
    pub fn new(config: &Config, recipes: Vec<Recipe>, rng: G) -> Self {
        Self {
            store: RecipeStore::new(&config.recipes_path),
            shopping_list_path: config.shopping_list_path.clone(),
            menu_days: config.menu_days,
            styled: config.styled,
            recipes,
            rng,
        }
    }

    /// Load the stored recipes, seeding and saving the samples when there are none
    pub async fn start<W>(config: &Config, rng: G, out: &mut W) -> Result<Self>
    where
        W: AsyncWrite + Unpin,
    {
        let mut app = Self::new(config, Vec::new(), rng);
        app.recipes = app.store.load().await;

        if app.recipes.is_empty() {
            say(out, "No recipes found. Creating sample recipes...").await?;
            app.reseed(out).await?;
        }

        Ok(app)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Prompt for commands until Exit is chosen or the input ends
    pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            say(out, MENU_TEXT).await?;
            out.write_all(PROMPT.as_bytes()).await?;
            out.flush().await?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .await
                .context("Failed to read command")?;
            if read == 0 {
                info!("input closed");
                say(out, "").await?;
                break;
            }
            let line = decode_line(&buf);

            if let AppAction::Exit = self.handle_input(&line, out).await? {
                break;
            }
        }

        out.flush().await?;
        Ok(())
    }

    pub async fn handle_input<W>(&mut self, input: &str, out: &mut W) -> Result<AppAction>
    where
        W: AsyncWrite + Unpin,
    {
        match Command::parse(input) {
            Some(command) => self.handle_command(command, out).await,
            None => {
                debug!(input, "invalid option");
                say(out, self.paint("Invalid option. Try again.", Tone::Notice)).await?;
                Ok(AppAction::Continue)
            }
        }
    }

    pub async fn handle_command<W>(&mut self, command: Command, out: &mut W) -> Result<AppAction>
    where
        W: AsyncWrite + Unpin,
    {
        match command {
            Command::ListRecipes => self.list_recipes(out).await?,
            Command::GenerateMenu => self.show_menu(out).await?,
            Command::ExportShoppingList => self.export_shopping_list(out).await?,
            Command::AddSampleData => {
                if self.reseed(out).await? {
                    say(out, self.paint("Sample data added and saved.", Tone::Success)).await?;
                }
            }
            Command::Exit => {
                say(out, "Goodbye.").await?;
                return Ok(AppAction::Exit);
            }
        }

        Ok(AppAction::Continue)
    }

    async fn list_recipes<W>(&self, out: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if self.recipes.is_empty() {
            say(out, "No recipes available.").await?;
            return Ok(());
        }

        say(out, format!("\n{}", self.paint("Recipes:", Tone::Heading))).await?;
        for (i, recipe) in self.recipes.iter().enumerate() {
            say(
                out,
                format!(
                    "{}. {} - Ingredients: {}",
                    i + 1,
                    recipe.name,
                    recipe.ingredient_count()
                ),
            )
            .await?;
        }

        Ok(())
    }

    async fn show_menu<W>(&mut self, out: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let menu = generate_menu(&self.recipes, self.menu_days, &mut self.rng);

        say(out, format!("\n{}", self.paint("Weekly Menu:", Tone::Heading))).await?;
        for (day, recipe) in menu.iter().enumerate() {
            say(out, format!("Day {}: {}", day + 1, recipe.name)).await?;
        }

        Ok(())
    }

    /// Draws a fresh menu rather than reusing the last one shown
    async fn export_shopping_list<W>(&mut self, out: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let menu = generate_menu(&self.recipes, self.menu_days, &mut self.rng);
        let items = export_shopping_list(&menu);

        match write_shopping_list(&self.shopping_list_path, &items).await {
            Ok(()) => {
                let message = format!(
                    "Shopping list exported to {}",
                    self.shopping_list_path.display()
                );
                say(out, self.paint(message, Tone::Success)).await?;
            }
            Err(err) => {
                error!(error = %err, "failed to export shopping list");
                let message = format!("Could not export shopping list: {err}");
                say(out, self.paint(message, Tone::Failure)).await?;
            }
        }

        Ok(())
    }

    /// Replace the collection with the sample recipes and persist it
    /// Returns whether the save succeeded; the samples stay in memory either way
    async fn reseed<W>(&mut self, out: &mut W) -> Result<bool>
    where
        W: AsyncWrite + Unpin,
    {
        self.recipes = sample_recipes();
        for recipe in &self.recipes {
            if let Some(summary) = recipe.cuisine_summary() {
                debug!(recipe = %recipe, "{}", summary);
            }
        }

        match self.store.save(&self.recipes).await {
            Ok(()) => {
                info!(count = self.recipes.len(), "seeded sample recipes");
                Ok(true)
            }
            Err(err) => {
                error!(error = %err, "failed to save recipes");
                let message = format!(
                    "Could not save recipes: {err}. They are kept in memory for this session."
                );
                say(out, self.paint(message, Tone::Failure)).await?;
                Ok(false)
            }
        }
    }
}

impl<G> PlannerApp<G> {
    fn paint(&self, text: impl Into<String>, tone: Tone) -> String {
        let text = text.into();
        if !self.styled {
            return text;
        }

        let styled: StyledContent<String> = match tone {
            Tone::Heading => text.bold(),
            Tone::Notice => text.yellow(),
            Tone::Success => text.green(),
            Tone::Failure => text.red(),
        };
        styled.to_string()
    }
}

/// Drop the `\n` or `\r\n` terminator; undecodable bytes become U+FFFD,
/// so such a line can never match a command
fn decode_line(buf: &[u8]) -> String {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

async fn say<W>(out: &mut W, line: impl Display) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(format!("{line}\n").as_bytes()).await
}
