use norsk_nummer::*;

fn main() {
    // KID numbers in both modes
    for base in ["234567", "1234567890", "40"] {
        for mode in [KidMode::Mod10, KidMode::Mod11] {
            let kid = make_kid_number(base, mode).expect("valid KID base");
            println!("KID {mode}: {base} -> {kid}");
        }
    }

    // Registry numbers
    let birth = make_birth_number("311299567").expect("valid birth number base");
    println!("\nBirth number:        {}", format_birth_number(&birth).expect("11 digits"));
    let account = make_account_number("8601111794").expect("valid account number base");
    println!("Account number:      {}", format_account_number(&account).expect("11 digits"));
    let org = make_organisation_number("92360901").expect("valid organisation number base");
    println!("Organisation number: {}", format_organisation_number(&org).expect("9 digits"));

    // Verification by kind
    println!("\nVerification:");
    for candidate in ["31129956715", "86011117947", "923609016", "923609017"] {
        let matches: Vec<String> = NumberKind::ALL
            .into_iter()
            .filter(|kind| kind.verify(candidate))
            .map(|kind| kind.to_string())
            .collect();
        println!("  {candidate}: {matches:?}");
    }
}
