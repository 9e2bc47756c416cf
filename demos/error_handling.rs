use norsk_nummer::*;

fn main() {
    // ── 1. Length errors ──────────────────────────────────────────────
    println!("=== Length ===");
    for value in ["", "01234567890123456789012345"] {
        if let Err(e) = make_kid_number(value, KidMode::Mod10) {
            println!("  {e}");
        }
    }

    // ── 2. Format errors ──────────────────────────────────────────────
    println!("\n=== Format ===");
    match make_kid_number("abc", KidMode::Mod10) {
        Ok(kid) => println!("  unexpected KID {kid}"),
        Err(e) => println!("  {e} (format error: {})", e.is_format_error()),
    }

    // ── 3. Rejected control digits ────────────────────────────────────
    println!("\n=== Control digit ===");
    // MOD11 KIDs accept the rejection symbol...
    println!("  KID MOD11 40 -> {:?}", make_kid_number("40", KidMode::Mod11));
    // ...registry numbers do not.
    println!("  birth 000000021 -> {:?}", make_birth_number("000000021"));
    println!("  account 0000002001 -> {:?}", make_account_number("0000002001"));
    println!("  organisation 00002001 -> {:?}", make_organisation_number("00002001"));

    // ── 4. Unknown mode ───────────────────────────────────────────────
    println!("\n=== Mode ===");
    match make_kid_number_named("1234", "MOD97") {
        Ok(kid) => println!("  unexpected KID {kid}"),
        Err(NumberError::InvalidMode { mode }) => println!("  no such mode: {mode}"),
        Err(e) => println!("  {e}"),
    }

    // ── 5. Verification never fails ───────────────────────────────────
    println!("\n=== Verify ===");
    for candidate in ["", "abc", "40-", "12345678903", "æøå"] {
        println!(
            "  {candidate:?}: kid(mod11)={} account={}",
            verify_kid_number(candidate, KidMode::Mod11),
            verify_account_number(candidate)
        );
    }
}
