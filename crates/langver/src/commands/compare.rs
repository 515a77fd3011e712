use std::cmp::Ordering;

use langver_version::LanguageVersion;

pub fn compare(a: LanguageVersion, b: LanguageVersion) {
    anstream::println!("{}", describe(a, b));
}

fn describe(a: LanguageVersion, b: LanguageVersion) -> String {
    let op = match a.cmp(&b) {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    };
    format!("{a} {op} {b}")
}
