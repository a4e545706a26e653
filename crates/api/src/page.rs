//! Server-rendered HTML for the dashboard pages.
//!
//! Minimal string-built shells: a `<head>` carrying the font links from
//! `acme_core::fonts`, and the invoice table / edit form bodies. Lusitana is
//! applied to headings, Inter to body text, matching the font configuration.

use acme_db::models::customer::Customer;
use acme_db::models::invoice::{Invoice, InvoiceWithCustomer};

use acme_core::fonts;

/// Format integer cents as a dollar string, e.g. `5000` → `$50.00`.
pub fn format_usd(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{sign}${}.{:02}", cents / 100, cents % 100)
}

/// Escape text interpolated into HTML content or attribute values.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page shell: font links in the head, heading styles inline.
fn shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\">\
         <title>{title}</title>\
         {fonts}\
         <style>\
         body {{ font-family: 'Inter', sans-serif; }}\
         h1 {{ font-family: 'Lusitana', serif; }}\
         </style>\
         </head>\
         <body>{body}</body>\
         </html>",
        title = escape_html(title),
        fonts = fonts::head_links(),
    )
}

/// The invoices list page.
///
/// `generation` is the page-cache generation the render was built from,
/// embedded as a marker comment so staleness is observable from the outside.
pub fn invoices_page(invoices: &[InvoiceWithCustomer], generation: u64) -> String {
    let mut rows = String::new();
    for invoice in invoices {
        let id = escape_html(&invoice.id);
        rows.push_str(&format!(
            "<tr>\
             <td>{name}</td>\
             <td>{amount}</td>\
             <td>{status}</td>\
             <td>{date}</td>\
             <td>\
             <a href=\"/dashboard/invoices/{id}/edit\">Edit</a>\
             <form method=\"post\" action=\"/dashboard/invoices/{id}/delete\">\
             <button type=\"submit\">Delete</button>\
             </form>\
             </td>\
             </tr>",
            name = escape_html(&invoice.customer_name),
            amount = format_usd(invoice.amount),
            status = escape_html(&invoice.status),
            date = invoice.date,
        ));
    }

    let body = format!(
        "<!-- generation: {generation} -->\
         <h1>Invoices</h1>\
         <table>\
         <thead><tr><th>Customer</th><th>Amount</th><th>Status</th><th>Date</th><th></th></tr></thead>\
         <tbody>{rows}</tbody>\
         </table>"
    );
    shell("Invoices", &body)
}

/// The edit form for one invoice, with the customer selector pre-filled.
pub fn edit_invoice_page(invoice: &Invoice, customers: &[Customer]) -> String {
    let mut options = String::new();
    for customer in customers {
        let selected = if customer.id == invoice.customer_id {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{id}\"{selected}>{name}</option>",
            id = escape_html(&customer.id),
            name = escape_html(&customer.name),
        ));
    }

    let (paid_checked, pending_checked) = match invoice.status.as_str() {
        "paid" => (" checked", ""),
        _ => ("", " checked"),
    };

    let body = format!(
        "<h1>Edit Invoice</h1>\
         <form method=\"post\" action=\"/dashboard/invoices/{id}\">\
         <select name=\"customerId\">{options}</select>\
         <input name=\"amount\" type=\"number\" step=\"0.01\" value=\"{amount}\">\
         <label><input type=\"radio\" name=\"status\" value=\"pending\"{pending_checked}>Pending</label>\
         <label><input type=\"radio\" name=\"status\" value=\"paid\"{paid_checked}>Paid</label>\
         <button type=\"submit\">Save</button>\
         </form>",
        id = escape_html(&invoice.id),
        amount = invoice.amount as f64 / 100.0,
    );
    shell("Edit Invoice", &body)
}
