use anyhow::Result;
use dialoguer::Input;
use slot_inventory::{
    command::{Command, HELP},
    config::ConfigLoader,
    logging::init_logger,
    ConsolePresenter, InteractionMediator, PresentationDriver,
};
use std::sync::Arc;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    info!("Starting slot inventory v{}", VERSION);

    // Load or create configuration
    let config_loader = ConfigLoader::new();
    let mut config = config_loader.load()?;

    // Prompt for capacity if not set
    if config.capacity.is_none() {
        let capacity: usize = Input::new()
            .with_prompt("Number of inventory slots")
            .default(12)
            .interact_text()?;
        config.capacity = Some(capacity);
        config_loader.save(&config)?;
    }
    let capacity = config.capacity.unwrap_or_default();

    info!("Inventory: {} slot(s), {} per row", capacity, config.columns);
    info!(
        "Label: hold {}ms, fade step {} every {}ms",
        config.label.hold_ms, config.label.fade_step, config.label.step_interval_ms
    );

    let presenter = Arc::new(ConsolePresenter::new(capacity, config.columns, config.slot_size));
    let driver: Arc<dyn PresentationDriver> = presenter.clone();
    let mut mediator = InteractionMediator::initialize(capacity, &config, driver)?;

    // Spawn event printer
    let mut events = mediator.subscribe();
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => info!("[Event] {}", json),
                Err(e) => warn!("Failed to encode event: {}", e),
            }
        }
    });

    info!("Console interface ready - type commands and press Enter:");
    println!("{}", HELP);
    print!("{}", presenter.render());

    let mut lines = BufReader::new(stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(msg) => {
                warn!("{}", msg);
                continue;
            }
        };

        let result = match command {
            Command::Add(item) => mediator.add_item(item),
            Command::Remove(index) => {
                mediator.remove_item(index);
                Ok(())
            }
            Command::Click(index) => mediator.notify_click(index),
            Command::Drag(index) => {
                if !mediator.notify_drag_begin(index) {
                    warn!("Slot {} cannot be dragged", index);
                }
                Ok(())
            }
            Command::Drop(target) => mediator.notify_drop(target),
            Command::DropAt(pos) => mediator.notify_drop_at(pos, presenter.as_ref()),
            Command::Deselect => mediator.deselect(),
            Command::Show => Ok(()),
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Quit => break,
        };

        if let Err(e) = result {
            warn!("{} ({:?})", e, e.kind());
        }
        print!("{}", presenter.render());
    }

    info!(
        "Shutting down with {}/{} slot(s) occupied",
        mediator.item_count(),
        capacity
    );
    Ok(())
}
