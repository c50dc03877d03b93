use clap::{Args, Parser, Subcommand};
use girocode::application::service::GiroCodeService;
use girocode::domain::epc::{can_encode, encode};
use girocode::domain::invoice::InvoiceRecord;
use girocode::domain::payment::PaymentPayload;
use girocode::domain::render::{DEFAULT_SIZE, ErrorCorrection, OutputFormat, RenderOptions};
use girocode::error::GiroCodeError;
use girocode::interfaces::csv::payment_reader::PaymentReader;
use girocode::interfaces::csv::result_writer::{EncodeResult, ResultWriter};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the EPC payload text for a payment
    Encode(PaymentArgs),
    /// Render a payment as a QR symbol
    Render {
        #[command(flatten)]
        payment: PaymentArgs,

        /// Image width in pixels
        #[arg(long, env = "GIROCODE_SIZE", default_value_t = DEFAULT_SIZE)]
        size: u32,

        /// Error correction level (L, M, Q, H)
        #[arg(long, env = "GIROCODE_EC_LEVEL", default_value = "M")]
        ec_level: ErrorCorrection,

        /// Output format (base64, data-url, svg)
        #[arg(long, env = "GIROCODE_FORMAT", default_value = "data-url")]
        format: OutputFormat,

        /// Write the result to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print whether a GiroCode can be produced for an account and currency
    Check {
        #[arg(long)]
        iban: Option<String>,

        /// Currency code or label, e.g. "EUR - Euro"
        #[arg(long)]
        currency: Option<String>,
    },
    /// Print the EPC payload text for an invoice JSON file
    Invoice {
        input: PathBuf,
    },
    /// Encode every payment of a CSV file and print the results as CSV
    Batch {
        input: PathBuf,
    },
}

#[derive(Args)]
struct PaymentArgs {
    /// Beneficiary name
    #[arg(long)]
    name: String,

    #[arg(long)]
    iban: String,

    #[arg(long)]
    bic: Option<String>,

    /// Amount in EUR
    #[arg(long)]
    amount: Option<Decimal>,

    #[arg(long)]
    reference: Option<String>,

    #[arg(long)]
    message: Option<String>,
}

impl From<PaymentArgs> for PaymentPayload {
    fn from(args: PaymentArgs) -> Self {
        PaymentPayload {
            name: args.name,
            iban: args.iban,
            bic: args.bic,
            amount: args.amount,
            reference: args.reference,
            message: args.message,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Encode(payment) => {
            let text = encode(&PaymentPayload::from(payment)).into_diagnostic()?;
            println!("{text}");
        }
        Command::Render {
            payment,
            size,
            ec_level,
            format,
            output,
        } => {
            let options = RenderOptions {
                size,
                error_correction_level: ec_level,
                format,
            };
            let service = GiroCodeService::default();
            let rendered = service
                .render_image(&PaymentPayload::from(payment), &options)
                .await
                .into_diagnostic()?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered).into_diagnostic()?;
                    info!(path = %path.display(), "wrote GiroCode");
                }
                None => println!("{rendered}"),
            }
        }
        Command::Check { iban, currency } => {
            println!("{}", can_encode(iban.as_deref(), currency.as_deref()));
        }
        Command::Invoice { input } => {
            let file = File::open(input).into_diagnostic()?;
            let invoice: InvoiceRecord = serde_json::from_reader(file).into_diagnostic()?;
            if !invoice.supports_girocode() {
                return Err(GiroCodeError::validation(
                    "GiroCode requires a sender IBAN and EUR currency",
                ))
                .into_diagnostic();
            }
            let text = encode(&invoice.payment_payload()).into_diagnostic()?;
            println!("{text}");
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentReader::new(file);
            let stdout = io::stdout();
            let mut writer = ResultWriter::new(stdout.lock());

            for (index, payment) in reader.payments().enumerate() {
                let row = index + 1;
                let result = match payment.and_then(|payment| encode(&payment)) {
                    Ok(text) => EncodeResult::ok(row, text),
                    Err(e) => {
                        warn!(row, "Error encoding payment: {}", e);
                        EncodeResult::failed(row, e)
                    }
                };
                writer.write(&result).into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}
