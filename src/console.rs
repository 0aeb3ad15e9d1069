//! Interactive console boundary
//!
//! Translates text commands into calls against the inventory store and prints
//! each outcome. All input validation lives here; by the time an operation
//! reaches the store its arguments are well-typed. Invalid input is reported
//! and the loop keeps running.

use crate::store::SharedInventory;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        id: u32,
        name: String,
        quantity: u32,
        price: f64,
    },
    Update {
        id: u32,
        quantity: u32,
    },
    Order {
        id: u32,
        quantity: u32,
    },
    List,
    Help,
    Quit,
}

/// Usage text printed for `help` and unknown commands.
pub const USAGE: &str = "\
Commands:
  add <id> <name> <quantity> <price>   add a product
  update <id> <quantity>               set a product's stock
  order <id> <quantity>                order from a product's stock
  list                                 show the inventory
  help                                 show this message
  quit                                 save and exit";

/// Parse one input line into a command.
///
/// The product name may contain spaces; for `add`, everything between the id
/// and the trailing quantity/price tokens is taken as the name.
pub fn parse(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Err("Empty command, try 'help'".to_string());
    };

    match keyword {
        "add" => {
            if args.len() < 4 {
                return Err("Usage: add <id> <name> <quantity> <price>".to_string());
            }
            let id = parse_u32(args[0], "id")?;
            let name = args[1..args.len() - 2].join(" ");
            let quantity = parse_u32(args[args.len() - 2], "quantity")?;
            let price = parse_price(args[args.len() - 1])?;
            Ok(Command::Add {
                id,
                name,
                quantity,
                price,
            })
        }
        "update" => {
            if args.len() != 2 {
                return Err("Usage: update <id> <quantity>".to_string());
            }
            Ok(Command::Update {
                id: parse_u32(args[0], "id")?,
                quantity: parse_u32(args[1], "quantity")?,
            })
        }
        "order" => {
            if args.len() != 2 {
                return Err("Usage: order <id> <quantity>".to_string());
            }
            Ok(Command::Order {
                id: parse_u32(args[0], "id")?,
                quantity: parse_u32(args[1], "quantity")?,
            })
        }
        "list" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{}', try 'help'", other)),
    }
}

fn parse_u32(token: &str, field: &str) -> Result<u32, String> {
    token
        .parse()
        .map_err(|_| format!("Invalid {}: '{}' (expected a non-negative integer)", field, token))
}

fn parse_price(token: &str) -> Result<f64, String> {
    let price: f64 = token
        .parse()
        .map_err(|_| format!("Invalid price: '{}' (expected a number)", token))?;
    if price < 0.0 || !price.is_finite() {
        return Err(format!("Invalid price: '{}' (must be non-negative)", token));
    }
    Ok(price)
}

/// Run one command against the store, printing the outcome.
///
/// Returns `false` when the user asked to quit.
pub fn execute(inventory: &SharedInventory, command: Command) -> bool {
    match command {
        Command::Add {
            id,
            name,
            quantity,
            price,
        } => {
            let mut inv = inventory.lock().unwrap();
            match inv.add_product(id, name, quantity, price) {
                Ok(()) => println!("Product added successfully"),
                Err(e) => println!("{}", e),
            }
        }
        Command::Update { id, quantity } => {
            let mut inv = inventory.lock().unwrap();
            match inv.update_stock(id, quantity) {
                Ok(()) => {
                    // id was just matched, the lookup cannot fail here
                    let name = inv.get(id).map(|p| p.name().to_string()).unwrap_or_default();
                    println!("Stock updated successfully for: {}", name);
                }
                Err(e) => println!("{}", e),
            }
        }
        Command::Order { id, quantity } => {
            let mut inv = inventory.lock().unwrap();
            match inv.place_order(id, quantity) {
                Ok(()) => {
                    let name = inv.get(id).map(|p| p.name().to_string()).unwrap_or_default();
                    println!("Order placed successfully for: {}", name);
                }
                Err(e) => println!("{}", e),
            }
        }
        Command::List => {
            let inv = inventory.lock().unwrap();
            if inv.is_empty() {
                println!("Inventory is empty");
            } else {
                println!("Inventory status ({}/{} products):", inv.len(), inv.capacity());
                for product in inv.products() {
                    println!("  {}", product);
                }
            }
        }
        Command::Help => println!("{}", USAGE),
        Command::Quit => return false,
    }
    true
}
