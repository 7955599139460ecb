use rfc_mx::*;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=rfc_mx=debug shows why each input was rejected
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== RFC Validation ===\n");

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        [
            "GODE561231GR8",    // person
            "mag-041126-gt8",   // company, unnormalized
            "GODE561231GR9",    // wrong verification digit
            "GODE561331GR2",    // month 13
            "GODE561331GR0",    // month 13 and wrong digit
            "NOT AN RFC",       // bad format
        ]
        .map(String::from)
        .to_vec()
    } else {
        inputs
    };

    for input in &inputs {
        let result = validate(input);
        match &result {
            ValidationResult::Valid { rfc, rfc_type } => {
                println!("  {input} => valid {rfc_type} ({rfc})")
            }
            ValidationResult::Invalid { errors } => {
                let kinds: Vec<&str> = errors.iter().map(ErrorKind::as_str).collect();
                println!("  {input} => INVALID: {}", kinds.join(", "))
            }
        }
        if let Ok(json) = serde_json::to_string(&result) {
            println!("      {json}");
        }
    }

    println!("\n=== Typed Parsing ===\n");

    match "GODE561231GR8".parse::<Rfc>() {
        Ok(rfc) => println!(
            "  {rfc}: letters={}, date={}, homoclave={}",
            rfc.letters(),
            rfc.date(),
            rfc.homoclave()
        ),
        Err(e) => println!("  {e}"),
    }
}
