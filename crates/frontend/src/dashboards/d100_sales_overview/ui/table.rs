use contracts::sales::SalesRecord;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::format::format_money;

#[derive(Clone, Copy, PartialEq)]
enum SortDir {
    Asc,
    Desc,
}

const COLUMNS: [(&str, &str); 10] = [
    ("product", "Product"),
    ("category", "Category"),
    ("price", "Price"),
    ("freight", "Freight"),
    ("purchase_date", "Purchase date"),
    ("seller", "Seller"),
    ("state", "State"),
    ("rating", "Rating"),
    ("payment_type", "Payment type"),
    ("installments", "Installments"),
];

fn compare_by_field(a: &SalesRecord, b: &SalesRecord, field: &str) -> Ordering {
    match field {
        "product" => a.product.cmp(&b.product),
        "category" => a.category.cmp(&b.category),
        "price" => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        "freight" => a.freight.partial_cmp(&b.freight).unwrap_or(Ordering::Equal),
        "purchase_date" => a.purchase_date.cmp(&b.purchase_date),
        "seller" => a.seller.cmp(&b.seller),
        "state" => a.state.cmp(&b.state),
        "rating" => a.rating.cmp(&b.rating),
        "payment_type" => a.payment_type.cmp(&b.payment_type),
        "installments" => a.installments.cmp(&b.installments),
        _ => Ordering::Equal,
    }
}

/// The raw, filtered dataset; click a header to sort by that column.
#[component]
pub fn RecordsTable(records: Vec<SalesRecord>) -> impl IntoView {
    let records = StoredValue::new(records);
    let sort_field = RwSignal::new(None::<&'static str>);
    let sort_dir = RwSignal::new(SortDir::Asc);

    let sorted = move || {
        let mut rows = records.get_value();
        if let Some(field) = sort_field.get() {
            rows.sort_by(|a, b| compare_by_field(a, b, field));
            if sort_dir.get() == SortDir::Desc {
                rows.reverse();
            }
        }
        rows
    };

    let headers = COLUMNS
        .iter()
        .map(|(field, label)| {
            let field = *field;
            let label = *label;
            let on_click = move |_| {
                if sort_field.get() == Some(field) {
                    sort_dir.update(|dir| {
                        *dir = match dir {
                            SortDir::Asc => SortDir::Desc,
                            SortDir::Desc => SortDir::Asc,
                        }
                    });
                } else {
                    sort_field.set(Some(field));
                    sort_dir.set(SortDir::Asc);
                }
            };
            let indicator = move || {
                if sort_field.get() == Some(field) {
                    match sort_dir.get() {
                        SortDir::Asc => " ▲",
                        SortDir::Desc => " ▼",
                    }
                } else {
                    ""
                }
            };
            view! {
                <th on:click=on_click>
                    {label}
                    {indicator}
                </th>
            }
        })
        .collect_view();

    view! {
        <div class="records-table-wrap">
            <h3 class="chart-title">{move || format!("Records ({})", records.get_value().len())}</h3>
            <table class="records-table">
                <thead>
                    <tr>{headers}</tr>
                </thead>
                <tbody>
                    {move || {
                        sorted()
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <tr>
                                        <td>{record.product.clone()}</td>
                                        <td>{record.category.clone()}</td>
                                        <td class="cell-number">{format_money(record.price)}</td>
                                        <td class="cell-number">{format_money(record.freight)}</td>
                                        <td>{record.purchase_date.format("%d/%m/%Y").to_string()}</td>
                                        <td>{record.seller.clone()}</td>
                                        <td>{record.state.clone()}</td>
                                        <td class="cell-number">{record.rating}</td>
                                        <td>{record.payment_type.clone()}</td>
                                        <td class="cell-number">{record.installments}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(product: &str, price: f64) -> SalesRecord {
        SalesRecord {
            product: product.into(),
            category: "livros".into(),
            price,
            freight: 5.0,
            purchase_date: NaiveDate::from_ymd_opt(2021, 6, 20).unwrap(),
            seller: "Ana Sousa".into(),
            state: "SP".into(),
            rating: 4,
            payment_type: "boleto".into(),
            installments: 1,
            lat: -22.19,
            lon: -48.79,
        }
    }

    #[test]
    fn compares_text_and_numeric_fields() {
        let a = record("Atlas", 10.0);
        let b = record("Zebra", 2.0);
        assert_eq!(compare_by_field(&a, &b, "product"), Ordering::Less);
        assert_eq!(compare_by_field(&a, &b, "price"), Ordering::Greater);
        assert_eq!(compare_by_field(&a, &b, "unknown"), Ordering::Equal);
    }
}
