use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rentals_admin::{
    ApiClient, ClientError, Config,
    common::ListParams,
    routes::{
        company_agent::AgentRequestStatus,
        dashboard::ActivityParams,
        property_request::{PropertyRequestFilter, PropertyRequestStats},
        setting::NewEquipmentCategory,
        subscription::SubscriptionPlan,
        user::UserListParams,
        user_subscription::UserSubscriptionParams,
    },
};
use serde::{Serialize, de::DeserializeOwned};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rentals-admin", about = "Admin console for the rentals marketplace API")]
struct Cli {
    /// Bypass the response cache for reads
    #[arg(long, global = true)]
    fresh: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in with an admin account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
    /// Dashboard counters
    Stats,
    /// Recent activity feed
    Activity {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    #[command(subcommand)]
    Users(UserCommand),
    #[command(subcommand)]
    Kyc(ModerationCommand),
    #[command(subcommand)]
    Listings(ModerationCommand),
    #[command(subcommand)]
    Plans(PlanCommand),
    #[command(subcommand)]
    Subscriptions(SubscriptionCommand),
    #[command(subcommand)]
    Settings(SettingCommand),
    #[command(subcommand)]
    Equipment(EquipmentCommand),
    #[command(subcommand)]
    Agents(AgentCommand),
    /// Browse property requests with status counters
    Requests {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        state: Option<String>,
    },
}

#[derive(Args, Clone, Default)]
struct PageArgs {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    search: Option<String>,
}

impl From<PageArgs> for ListParams {
    fn from(args: PageArgs) -> Self {
        ListParams {
            page: args.page,
            limit: args.limit,
            status: args.status,
            search: args.search,
        }
    }
}

#[derive(Subcommand)]
enum UserCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    Show { id: String },
    /// Replace a user's roles
    Roles { id: String, roles: Vec<String> },
    /// Flip, or with --active set, the account status
    Toggle {
        id: String,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
enum ModerationCommand {
    List(PageArgs),
    Show { id: String },
    Approve { id: String },
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
    },
    /// Set a listing's status (listings only)
    Status { id: String, status: String },
    Delete { id: String },
    Stats,
}

#[derive(Subcommand)]
enum PlanCommand {
    List,
    Show { id: String },
    /// Create a plan from a JSON object
    Create { plan: String },
    /// Replace a plan with a JSON object (must carry plan_id)
    Update { plan: String },
    Delete { id: String },
}

#[derive(Subcommand)]
enum SubscriptionCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        expiring_within_days: Option<u32>,
    },
    Remind { id: String },
    Delete { id: String },
}

#[derive(Subcommand)]
enum SettingCommand {
    List {
        #[arg(long)]
        group: Option<String>,
    },
    Grouped,
    /// Set a setting to a JSON value
    Set { key: String, value: String },
    Delete { key: String },
    Boosts,
}

#[derive(Subcommand)]
enum EquipmentCommand {
    List,
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        item_type: Option<String>,
    },
    Toggle { id: i64 },
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum AgentCommand {
    List {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },
    Approve { id: i64 },
    Reject {
        id: i64,
        #[arg(long)]
        reason: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StatusArg {
    Pending,
    Approved,
    Rejected,
}

impl From<StatusArg> for AgentRequestStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Pending => AgentRequestStatus::Pending,
            StatusArg::Approved => AgentRequestStatus::Approved,
            StatusArg::Rejected => AgentRequestStatus::Rejected,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mutating = cli.command.is_mutation();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("{}", e.user_message(mutating));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = Config::from_env()?;
    let client = rentals_admin::connect(config).await?;
    let fresh = cli.fresh;

    match cli.command {
        Command::Login { email, password } => {
            let user = client.login(&email, &password).await?;
            print_json(&user)
        }
        Command::Logout => client.logout().await,
        Command::Whoami => print_json(&client.current_admin().await?),
        command => {
            client.current_admin().await?;
            run_authenticated(&client, command, fresh).await
        }
    }
}

async fn run_authenticated(client: &ApiClient, command: Command, fresh: bool) -> Result<(), ClientError> {
    match command {
        Command::Stats => print_json(&client.get_dashboard_stats(fresh).await?),
        Command::Activity { filter, page, limit } => {
            let params = ActivityParams { filter, page, limit };
            print_json(&client.get_recent_activities(&params, fresh).await?)
        }
        Command::Users(cmd) => match cmd {
            UserCommand::List { page, limit, search, role } => {
                let params = UserListParams { page, limit, search, role };
                print_json(&client.get_users(&params, fresh).await?)
            }
            UserCommand::Show { id } => print_json(&client.get_user_details(&id, fresh).await?),
            UserCommand::Roles { id, roles } => {
                print_json(&client.update_user_roles(&id, &roles).await?)
            }
            UserCommand::Toggle { id, active } => {
                print_json(&client.toggle_user_status(&id, active).await?)
            }
            UserCommand::Delete { id } => print_json(&client.delete_user(&id).await?),
        },
        Command::Kyc(cmd) => match cmd {
            ModerationCommand::List(args) => {
                print_json(&client.get_kyc_requests(&args.into(), fresh).await?)
            }
            ModerationCommand::Show { id } => print_json(&client.get_kyc_details(&id, fresh).await?),
            ModerationCommand::Approve { id } => print_json(&client.approve_kyc(&id).await?),
            ModerationCommand::Reject { id, reason } => {
                print_json(&client.reject_kyc(&id, &reason).await?)
            }
            ModerationCommand::Status { .. } => Err(ClientError::Validation(
                "KYC requests have no status command; use approve or reject".into(),
            )),
            ModerationCommand::Delete { id } => print_json(&client.delete_kyc(&id).await?),
            ModerationCommand::Stats => print_json(&client.get_kyc_stats(fresh).await?),
        },
        Command::Listings(cmd) => match cmd {
            ModerationCommand::List(args) => {
                print_json(&client.get_listings(&args.into(), fresh).await?)
            }
            ModerationCommand::Show { id } => {
                print_json(&client.get_listing_details(&id, fresh).await?)
            }
            ModerationCommand::Approve { id } => print_json(&client.approve_listing(&id).await?),
            ModerationCommand::Reject { id, reason } => {
                print_json(&client.reject_listing(&id, &reason).await?)
            }
            ModerationCommand::Status { id, status } => {
                print_json(&client.update_listing_status(&id, &status).await?)
            }
            ModerationCommand::Delete { id } => print_json(&client.delete_listing(&id).await?),
            ModerationCommand::Stats => print_json(&client.get_listing_stats(fresh).await?),
        },
        Command::Plans(cmd) => match cmd {
            PlanCommand::List => print_json(&client.get_subscription_plans(fresh).await?),
            PlanCommand::Show { id } => {
                print_json(&client.get_subscription_details(&id, fresh).await?)
            }
            PlanCommand::Create { plan } => {
                let plan: SubscriptionPlan = parse_json_arg("plan", &plan)?;
                print_json(&client.create_subscription_plan(&plan).await?)
            }
            PlanCommand::Update { plan } => {
                let plan: SubscriptionPlan = parse_json_arg("plan", &plan)?;
                print_json(&client.update_subscription_plan(&plan).await?)
            }
            PlanCommand::Delete { id } => {
                print_json(&client.delete_subscription_plan(&id).await?)
            }
        },
        Command::Subscriptions(cmd) => match cmd {
            SubscriptionCommand::List { page, expiring_within_days } => {
                let params = UserSubscriptionParams {
                    page: page.page,
                    limit: page.limit,
                    status: page.status,
                    search: page.search,
                    expiring_within_days,
                };
                print_json(&client.get_user_subscriptions(&params, fresh).await?)
            }
            SubscriptionCommand::Remind { id } => {
                print_json(&client.send_subscription_reminder(&id).await?)
            }
            SubscriptionCommand::Delete { id } => {
                print_json(&client.delete_user_subscription(&id).await?)
            }
        },
        Command::Settings(cmd) => match cmd {
            SettingCommand::List { group } => {
                print_json(&client.get_settings(group.as_deref(), fresh).await?)
            }
            SettingCommand::Grouped => print_json(&client.get_settings_grouped(fresh).await?),
            SettingCommand::Set { key, value } => {
                let value: serde_json::Value = parse_json_arg("value", &value)?;
                print_json(&client.update_setting(&key, &value).await?)
            }
            SettingCommand::Delete { key } => print_json(&client.delete_setting(&key).await?),
            SettingCommand::Boosts => print_json(&client.get_boost_tiers(fresh).await?),
        },
        Command::Equipment(cmd) => match cmd {
            EquipmentCommand::List => print_json(&client.get_equipment_categories(fresh).await?),
            EquipmentCommand::Add { name, description, item_type } => {
                let category = NewEquipmentCategory {
                    name,
                    description,
                    active: Some(true),
                    item_type,
                };
                print_json(&client.create_equipment_category(&category).await?)
            }
            EquipmentCommand::Toggle { id } => {
                print_json(&client.toggle_equipment_category(id).await?)
            }
            EquipmentCommand::Delete { id } => {
                print_json(&client.delete_equipment_category(id).await?)
            }
        },
        Command::Agents(cmd) => match cmd {
            AgentCommand::List { status } => {
                let requests = client
                    .get_company_agent_requests(status.map(Into::into))
                    .await?;
                print_json(&requests)
            }
            AgentCommand::Approve { id } => print_json(&client.approve_company_agent(id).await?),
            AgentCommand::Reject { id, reason } => {
                print_json(&client.reject_company_agent(id, &reason).await?)
            }
        },
        Command::Requests { status, state } => {
            let requests = client
                .browse_property_requests(&PropertyRequestFilter { status, state })
                .await?;
            let stats = PropertyRequestStats::from_requests(&requests);
            print_json(&serde_json::json!({ "stats": stats, "requests": requests }))
        }
        Command::Login { .. } | Command::Logout | Command::Whoami => Ok(()),
    }
}

impl Command {
    fn is_mutation(&self) -> bool {
        match self {
            Command::Login { .. } | Command::Logout => true,
            Command::Users(cmd) => !matches!(cmd, UserCommand::List { .. } | UserCommand::Show { .. }),
            Command::Kyc(cmd) | Command::Listings(cmd) => !matches!(
                cmd,
                ModerationCommand::List(_) | ModerationCommand::Show { .. } | ModerationCommand::Stats
            ),
            Command::Plans(cmd) => !matches!(cmd, PlanCommand::List | PlanCommand::Show { .. }),
            Command::Subscriptions(cmd) => !matches!(cmd, SubscriptionCommand::List { .. }),
            Command::Settings(cmd) => {
                matches!(cmd, SettingCommand::Set { .. } | SettingCommand::Delete { .. })
            }
            Command::Equipment(cmd) => !matches!(cmd, EquipmentCommand::List),
            Command::Agents(cmd) => !matches!(cmd, AgentCommand::List { .. }),
            Command::Whoami | Command::Stats | Command::Activity { .. } | Command::Requests { .. } => {
                false
            }
        }
    }
}

fn parse_json_arg<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, ClientError> {
    serde_json::from_str(raw)
        .map_err(|e| ClientError::Validation(format!("{} is not valid JSON: {}", name, e)))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClientError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
