//! Demonstration of the statement conversion pipeline
//!
//! Run with: cargo run --example convert_demo

use geothm_core::convert::Converter;
use geothm_core::model::*;

fn main() {
    println!("=== Statement Conversion Demo ===\n");

    // 1. Construction Protocol
    println!("1. Construction Protocol:");
    let mut protocol = ConstructionProtocol::new();
    protocol.set_theorem_name("midline");

    for name in ["A", "B", "C", "M", "N"] {
        protocol.add_object(GeoObject::Point(Point::new(name)));
        protocol.add_step(ConstructionStep::new(name, "point"));
    }
    protocol.add_object(GeoObject::Line(Line::new(
        "MN",
        vec!["M".to_string(), "N".to_string()],
    )));
    protocol.add_object(GeoObject::Line(Line::new(
        "BC",
        vec!["B".to_string(), "C".to_string()],
    )));

    println!("   Theorem: {:?}", protocol.theorem_name());
    println!("   Objects: {}", protocol.len());
    println!("   Steps: {}\n", protocol.steps().len());

    // 2. Auxiliary typed views
    println!("2. Auxiliary Objects:");
    let mut auxiliaries = AuxiliaryObjects::new();
    auxiliaries.insert(GeoObject::Segment(Segment::new("AM", "A", "M")));
    auxiliaries.insert(GeoObject::Segment(Segment::new("MB", "M", "B")));
    println!("   Auxiliary views: {}\n", auxiliaries.len());

    // 3. Statement commands
    println!("3. Statement Commands:");
    let commands = vec![
        StatementCommand::new(
            CommandKind::Parallel,
            vec!["MN".to_string(), "BC".to_string()],
        ),
        StatementCommand::new(
            CommandKind::Equal,
            vec!["AM".to_string(), "MB".to_string()],
        ),
        StatementCommand::new(
            CommandKind::Collinear,
            vec!["A".to_string(), "M".to_string(), "X".to_string()],
        ),
    ];
    for command in &commands {
        println!("   {} {:?}", command.kind(), command.args());
    }

    // 4. Conversion
    println!("\n4. Conversion:");
    let converter = Converter::new(&protocol, &auxiliaries);
    for command in &commands {
        match converter.convert(command) {
            Ok(statement) => println!("   ok: {}", statement),
            Err(err) => println!("   failed: {}", err),
        }
    }

    // 5. Batch conversion and serialization
    println!("\n5. Batch:");
    let statements = converter.convert_batch(&commands);
    println!("   {} of {} commands converted", statements.len(), commands.len());

    match serde_json::to_string_pretty(&statements) {
        Ok(json) => println!("   JSON output:\n{}", json),
        Err(err) => println!("   serialization failed: {}", err),
    }

    println!("\n=== Demo Complete ===");
}
