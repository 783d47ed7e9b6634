use colored::Colorize;
use roster::model::Record;
use roster::stats::Summary;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const EMAIL_WIDTH: usize = 30;
const AGE_WIDTH: usize = 4;
const GENDER_WIDTH: usize = 6;
const SALARY_WIDTH: usize = 10;

// Six columns separated by single spaces.
const TABLE_WIDTH: usize =
    ID_WIDTH + NAME_WIDTH + EMAIL_WIDTH + AGE_WIDTH + GENDER_WIDTH + SALARY_WIDTH + 5;

pub fn print_table(records: &[Record]) {
    let header = format!(
        "{} {} {} {} {} {}",
        pad("Id", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad("Email", EMAIL_WIDTH),
        pad("Age", AGE_WIDTH),
        pad("Gender", GENDER_WIDTH),
        pad("Salary", SALARY_WIDTH),
    );
    println!("{}", header.bold());
    println!("{}", "-".repeat(TABLE_WIDTH));

    for record in records {
        println!(
            "{} {} {} {} {} {}",
            pad(&record.id.to_string(), ID_WIDTH),
            pad(&record.name, NAME_WIDTH),
            pad(&record.email, EMAIL_WIDTH),
            pad(&record.age.to_string(), AGE_WIDTH),
            pad(&record.gender, GENDER_WIDTH),
            pad(&format!("{:.2}", record.salary), SALARY_WIDTH),
        );
    }
}

pub fn print_summary(summary: &Summary) {
    println!("{}", "Statistics".bold());
    println!("  Total records:  {}", summary.total);
    println!("  Average age:    {:.2}", summary.avg_age);
    println!("  Average salary: {:.2}", summary.avg_salary);
    println!("  Men (M):        {}", summary.men);
    println!("  Women (F):      {}", summary.women);
    println!("  Unspecified:    {}", summary.unspecified);
}

/// Pads or truncates a value to an exact display width, unicode-aware.
/// Truncated values end in `…`.
fn pad(s: &str, width: usize) -> String {
    if s.width() <= width {
        let fill = width - s.width();
        return format!("{}{}", s, " ".repeat(fill));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    let fill = width.saturating_sub(out.width());
    format!("{}{}", out, " ".repeat(fill))
}
