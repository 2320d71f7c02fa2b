//! Basket CLI - inspect and mutate a durable cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart
//! basket show
//!
//! # Add an item (a repeat add bumps the quantity)
//! basket add --id p1 --title "Shirt" --image-url https://cdn.example/p1.jpg --price 19.99
//!
//! # Change quantities
//! basket increment p1
//! basket decrement p1
//!
//! # Empty the cart
//! basket clear
//! ```
//!
//! The cart is stored under `BASKET_DATA_DIR` (default `.basket`), so it
//! survives between invocations - each run hydrates the previous snapshot.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use basket_cart::{CartManager, CartSession, FileStore};
use basket_core::{CartItem, ProductId};

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "basket")]
#[command(author, version, about = "Basket cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart contents
    Show,
    /// Add an item to the cart, or bump its quantity if already present
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display title
        #[arg(long)]
        title: String,

        /// Display image URL
        #[arg(long, default_value = "")]
        image_url: String,

        /// Unit price, e.g. 19.99
        #[arg(long)]
        price: Decimal,
    },
    /// Increase the quantity of an item by one
    Increment {
        /// Product id
        id: String,
    },
    /// Decrease the quantity of an item by one (removes it at zero)
    Decrement {
        /// Product id
        id: String,
    },
    /// Empty the cart and delete the stored snapshot
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env();
    let store = FileStore::open(&config.data_dir).await?;
    let mut session = CartSession::start(store).await;

    match cli.command {
        Commands::Show => show(session.cart()?),
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => {
            let item = CartItem::new(&id, title, image_url, price)?;
            session.cart_mut()?.add_to_cart(item).await?;
            show(session.cart()?);
        }
        Commands::Increment { id } => {
            let id: ProductId = id.parse()?;
            session.cart_mut()?.increment(&id).await?;
            show(session.cart()?);
        }
        Commands::Decrement { id } => {
            let id: ProductId = id.parse()?;
            session.cart_mut()?.decrement(&id).await?;
            show(session.cart()?);
        }
        Commands::Clear => {
            session.cart_mut()?.clear().await?;
            println!("cart cleared");
        }
    }

    Ok(())
}

/// Print the cart as a quantity/title/price table.
fn show(cart: &CartManager<FileStore>) {
    if cart.products().is_empty() {
        println!("cart is empty");
        return;
    }

    for entry in cart.products() {
        println!(
            "{:>4} x {:<32} {:>10}  [{}]",
            entry.quantity,
            entry.title,
            format!("${}", entry.price),
            entry.id
        );
    }

    let state = cart.state();
    println!(
        "total: {} unit(s), subtotal ${:.2}",
        state.total_quantity(),
        state.subtotal()
    );
}
