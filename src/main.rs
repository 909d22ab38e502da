use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use invoicer::{
    Catalog, Decimal, InvoiceDraft, InvoiceError, InvoiceRenderer, LineItem, SaleType, TaxRates,
    compute_totals,
};
use invoicer_layout::{format_money, format_quantity};
use std::fs;
use std::path::{Path, PathBuf};

/// Computes invoice totals and renders single-page PDF invoices.
#[derive(Parser, Debug)]
#[command(name = "invoicer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the totals for a JSON list of line items.
    Totals {
        items: PathBuf,
        #[arg(long)]
        cgst: Option<Decimal>,
        #[arg(long)]
        sgst: Option<Decimal>,
    },
    /// Render an invoice PDF from catalog records and a JSON list of line items.
    Generate {
        /// Directory holding company_profile.json, sample_customers.json and sample_products.json.
        #[arg(long)]
        data_dir: PathBuf,
        #[arg(long)]
        items: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Customer name as listed in sample_customers.json; defaults to the first one.
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        invoice_no: Option<String>,
        /// Invoice date as YYYY-MM-DD; defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        /// `state` or `interstate`.
        #[arg(long)]
        sale_type: Option<SaleType>,
        #[arg(long)]
        state_code: Option<String>,
        #[arg(long)]
        cgst: Option<Decimal>,
        #[arg(long)]
        sgst: Option<Decimal>,
    },
}

fn read_items(path: &Path) -> Result<Vec<LineItem>, InvoiceError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn rates_or(defaults: TaxRates, cgst: Option<Decimal>, sgst: Option<Decimal>) -> TaxRates {
    TaxRates::new(
        cgst.unwrap_or(defaults.cgst_rate),
        sgst.unwrap_or(defaults.sgst_rate),
    )
}

fn run(cli: Cli) -> Result<(), InvoiceError> {
    match cli.command {
        Command::Totals { items, cgst, sgst } => {
            let items = read_items(&items)?;
            let totals = compute_totals(&items, rates_or(TaxRates::default(), cgst, sgst));
            println!("Subtotal:       {}", format_money(totals.subtotal));
            println!("CGST:           {}", format_money(totals.cgst));
            println!("SGST:           {}", format_money(totals.sgst));
            println!("Total:          {}", format_money(totals.total));
            println!("Total quantity: {}", format_quantity(totals.total_quantity));
        }
        Command::Generate {
            data_dir,
            items,
            out,
            customer,
            invoice_no,
            date,
            sale_type,
            state_code,
            cgst,
            sgst,
        } => {
            let catalog = Catalog::load(&data_dir)?;
            let rows = read_items(&items)?;

            let mut draft = InvoiceDraft::new(&catalog.company);
            if let Some(no) = invoice_no {
                draft.meta.invoice_no = no;
            }
            if let Some(date) = date {
                draft.meta.date = date;
            }
            if let Some(sale_type) = sale_type {
                draft.meta.sale_type = sale_type;
            }
            if let Some(code) = state_code {
                draft.meta.state_code = code;
            }
            draft.customer = match customer {
                Some(name) => catalog.customer(&name),
                None => catalog.default_customer(),
            };
            draft.set_tax_rates(rates_or(draft.tax_rates(), cgst, sgst));
            draft.fill_rows(rows, &catalog)?;

            let payload = draft.snapshot(&catalog.company);
            InvoiceRenderer::default().render_to_file(&payload, &out)?;
            println!(
                "Wrote invoice {} ({} total) to {}",
                payload.invoice.invoice_no,
                payload.totals.total,
                out.display()
            );
        }
    }
    Ok(())
}

fn main() -> Result<(), InvoiceError> {
    env_logger::init();
    let cli = Cli::parse();
    run(cli).inspect_err(|e| log::error!("{e}"))
}
