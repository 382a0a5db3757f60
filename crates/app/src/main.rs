//! Dhaba storefront CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use rusty_money::{Money, iso};

use dhaba::{
    draft::OrderDraft,
    pricing::{OrderTotals, OrderType},
};
use dhaba_app::{
    config::StorefrontConfig,
    context::StorefrontContext,
    domain::{
        checkout::CheckoutService,
        menu::group_by_category,
        profile::{Profile, ProfileService, ProfileServiceError},
    },
    images::resolve_menu_image,
    logging,
    session::Session,
    store::{AppMode, CartStore, JsonFileStorage},
};

#[derive(Debug, Parser)]
#[command(name = "dhaba", about = "Dhaba storefront CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: StorefrontConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List restaurants
    Restaurants {
        /// Show only canteen vendors
        #[arg(long)]
        canteen: bool,
    },

    /// Show a restaurant's menu grouped by category
    Menu {
        /// Restaurant identifier
        restaurant_id: String,
    },

    /// Switch between restaurant and canteen browsing
    Mode {
        #[arg(value_enum)]
        mode: AppMode,
    },

    /// Inspect or edit the active cart
    Cart(CartCommand),

    /// Show or update the saved contact profile
    Profile(ProfileCommand),

    /// Validate the cart and submit the order
    Checkout(CheckoutArgs),
}

#[derive(Debug, Args)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Print the cart contents and subtotal
    Show,

    /// Add a menu item to the cart
    Add {
        /// Restaurant identifier
        restaurant_id: String,

        /// Menu item identifier
        item_id: String,

        /// Units to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Adjust a line's quantity by a signed delta
    Qty {
        /// Menu item identifier
        item_id: String,

        /// Signed change, e.g. -1
        #[arg(long, allow_hyphen_values = true)]
        delta: i64,
    },

    /// Remove a line from the cart
    Remove {
        /// Menu item identifier
        item_id: String,
    },

    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct ProfileCommand {
    #[command(flatten)]
    session: SessionArgs,

    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProfileSubcommand {
    /// Print the saved contact details
    Show,

    /// Update contact details; fields not given keep their saved value
    Set {
        /// Customer name
        #[arg(long)]
        name: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Delivery address
        #[arg(long)]
        address: Option<String>,
    },
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Customer name; falls back to the profile pre-fill
    #[arg(long)]
    name: Option<String>,

    /// Customer phone; falls back to the profile pre-fill
    #[arg(long)]
    phone: Option<String>,

    /// Contact email
    #[arg(long)]
    email: Option<String>,

    /// Deliver instead of takeaway
    #[arg(long)]
    delivery: bool,

    /// Delivery address; falls back to the profile pre-fill
    #[arg(long)]
    address: Option<String>,

    /// Special instructions for the kitchen
    #[arg(long)]
    notes: Option<String>,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Debug, Args)]
struct SessionArgs {
    /// Signed-in user identifier, enables profile access and pre-fill
    #[arg(long, env = "DHABA_SESSION_USER")]
    session_user: Option<String>,

    /// Bearer token for the profile service
    #[arg(long, env = "DHABA_SESSION_TOKEN")]
    session_token: Option<String>,

    /// Session email used when pre-filling
    #[arg(long, env = "DHABA_SESSION_EMAIL")]
    session_email: Option<String>,
}

impl SessionArgs {
    fn session(&self) -> Option<Session> {
        let user_id = self.session_user.clone()?;
        let access_token = self.session_token.clone()?;

        Some(Session {
            user_id,
            name: None,
            email: self.session_email.clone(),
            image: None,
            access_token,
        })
    }
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init_subscriber(&cli.config.log_level) {
        eprintln!("failed to initialise logging: {error}");
    }

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let context = StorefrontContext::from_base_url(&cli.config.api_base_url);
    let mut store = CartStore::with_storage(Box::new(JsonFileStorage::new(&cli.config.state_path)));

    match cli.command {
        Commands::Restaurants { canteen } => list_restaurants(&context, canteen).await,
        Commands::Menu { restaurant_id } => show_menu(&context, &restaurant_id).await,
        Commands::Mode { mode } => {
            store.set_mode(mode);
            println!("browsing mode set to {mode:?}");

            Ok(())
        }
        Commands::Cart(CartCommand { command }) => cart_command(&context, &mut store, command).await,
        Commands::Profile(ProfileCommand { session, command }) => {
            profile_command(context.profile.as_ref(), session.session(), command).await
        }
        Commands::Checkout(args) => checkout(&context, &mut store, args).await,
    }
}

async fn list_restaurants(context: &StorefrontContext, canteen: bool) -> Result<(), String> {
    let restaurants = context
        .menu
        .restaurants(Some(canteen))
        .await
        .map_err(|error| format!("failed to list restaurants: {error}"))?;

    if restaurants.is_empty() {
        println!("no restaurants available at the moment");
        return Ok(());
    }

    for restaurant in restaurants {
        println!("{} [{}]", restaurant.name, restaurant.restaurant_id);
        println!("  rating: {:.1}", restaurant.rating);

        if let Some(cuisine) = &restaurant.cuisine_type {
            println!("  cuisine: {cuisine}");
        }

        if let Some(address) = &restaurant.address {
            println!("  address: {address}");
        }
    }

    Ok(())
}

async fn show_menu(context: &StorefrontContext, restaurant_id: &str) -> Result<(), String> {
    let view = context
        .menu
        .menu(restaurant_id)
        .await
        .map_err(|error| format!("failed to fetch menu: {error}"))?;

    println!("{}", view.restaurant.name);

    for (category, items) in group_by_category(&view.menu_items) {
        println!("\n{category}");

        for item in items {
            let price = inr(item.price_minor());
            let availability = if item.is_available { "" } else { "  (unavailable)" };

            println!("  {} [{}] {price}{availability}", item.name, item.item_id);
            println!("    image: {}", resolve_menu_image(&item.name, item.image_url.as_deref()));
        }
    }

    Ok(())
}

async fn cart_command(
    context: &StorefrontContext,
    store: &mut CartStore,
    command: CartSubcommand,
) -> Result<(), String> {
    match command {
        CartSubcommand::Show => {
            if store.cart().is_empty() {
                println!("cart is empty");
                return Ok(());
            }

            if let Some(name) = store.cart().restaurant_name() {
                println!("from: {name}");
            }

            for line in store.cart().lines() {
                println!(
                    "  {} x{} @ {} [{}]",
                    line.name,
                    line.quantity,
                    inr(line.unit_price),
                    line.item_id
                );
            }

            println!("items: {}", store.total_items());
            println!("subtotal: {}", inr(store.total_price()));

            Ok(())
        }
        CartSubcommand::Add {
            restaurant_id,
            item_id,
            quantity,
        } => {
            let view = context
                .menu
                .menu(&restaurant_id)
                .await
                .map_err(|error| format!("failed to fetch menu: {error}"))?;

            let item = view
                .menu_items
                .iter()
                .find(|item| item.item_id == item_id)
                .ok_or_else(|| format!("no item {item_id} on this menu"))?;

            if !item.is_available {
                return Err(format!("{} is currently unavailable", item.name));
            }

            store
                .add_item(item.to_cart_line(&view.restaurant, quantity))
                .map_err(|error| format!("{error}"))?;

            println!(
                "added {}; in cart x{}",
                item.name,
                cart_line_quantity(store, &item_id)
            );

            Ok(())
        }
        CartSubcommand::Qty { item_id, delta } => {
            store.update_quantity(&item_id, delta);
            println!("items: {}", store.total_items());

            Ok(())
        }
        CartSubcommand::Remove { item_id } => {
            store.remove_item(&item_id);
            println!("items: {}", store.total_items());

            Ok(())
        }
        CartSubcommand::Clear => {
            store.clear_cart();
            println!("cart cleared");

            Ok(())
        }
    }
}

async fn profile_command(
    profile: &dyn ProfileService,
    session: Option<Session>,
    command: ProfileSubcommand,
) -> Result<(), String> {
    let session = session.ok_or_else(|| {
        "sign in first: set DHABA_SESSION_USER and DHABA_SESSION_TOKEN".to_owned()
    })?;

    match command {
        ProfileSubcommand::Show => {
            let saved = profile
                .fetch(&session)
                .await
                .map_err(|error| format!("failed to fetch profile: {error}"))?;

            println!("name:    {}", saved.name.as_deref().unwrap_or("(unset)"));
            println!("phone:   {}", saved.phone.as_deref().unwrap_or("(unset)"));
            println!("address: {}", saved.address.as_deref().unwrap_or("(unset)"));

            Ok(())
        }
        ProfileSubcommand::Set {
            name,
            phone,
            address,
        } => {
            // First save starts from a blank row; later saves keep any
            // field the user did not pass.
            let current = match profile.fetch(&session).await {
                Ok(saved) => saved,
                Err(ProfileServiceError::NotFound) => Profile::default(),
                Err(error) => return Err(format!("failed to fetch profile: {error}")),
            };

            let updated = Profile {
                name: name.or(current.name),
                phone: phone.or(current.phone),
                address: address.or(current.address),
            };

            profile
                .save(&session, &updated)
                .await
                .map_err(|error| format!("failed to save profile: {error}"))?;

            println!("profile saved");

            Ok(())
        }
    }
}

async fn checkout(
    context: &StorefrontContext,
    store: &mut CartStore,
    args: CheckoutArgs,
) -> Result<(), String> {
    let service = CheckoutService::new(context.orders.clone(), context.profile.clone());

    let session = args.session.session();
    let prefill = service.prefill(session.as_ref()).await;

    let draft = OrderDraft {
        customer_name: args.name.unwrap_or(prefill.customer_name),
        customer_phone: args.phone.unwrap_or(prefill.customer_phone),
        customer_email: args.email.or_else(|| non_blank(prefill.customer_email)),
        order_type: if args.delivery {
            OrderType::Delivery
        } else {
            OrderType::Takeaway
        },
        delivery_address: args.address.or_else(|| non_blank(prefill.delivery_address)),
        notes: args.notes,
    };

    print_totals(service.totals(store, &draft));

    let receipt = service
        .place_order(store, &draft)
        .await
        .map_err(|error| format!("failed to place order: {error}"))?;

    println!("order placed: {}", receipt.order_id);

    Ok(())
}

fn print_totals(totals: OrderTotals) {
    println!("subtotal:     {}", inr(totals.subtotal));
    println!("taxes (5%):   {}", inr(totals.tax));

    if totals.delivery_fee > 0 {
        println!("delivery fee: {}", inr(totals.delivery_fee));
    }

    println!("total:        {}", inr(totals.total));
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Quantity of the line as the store now holds it, after any merge clamp.
fn cart_line_quantity(store: &CartStore, item_id: &str) -> u32 {
    store
        .cart()
        .lines()
        .iter()
        .find(|line| line.item_id == item_id)
        .map_or(0, |line| line.quantity)
}

fn inr(minor: u64) -> Money<'static, iso::Currency> {
    Money::from_minor(i64::try_from(minor).unwrap_or(i64::MAX), iso::INR)
}
