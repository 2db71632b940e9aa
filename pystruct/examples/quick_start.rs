use std::io::Cursor;

use pystruct::prelude::*;

fn main() -> Result<()> {
    println!("=== pystruct Quick Start ===\n");

    // A sensor sample: id, temperature, flags, 8-byte tag
    let sample = Struct::new("<HfB8s")?;
    println!("Format {:?}: {} bytes, {} items", sample.format(), sample.size(), sample.count());

    for field in sample.layout().fields() {
        println!("  item {} ({}) at offset {}, {} bytes", field.index, field.code, field.offset, field.width);
    }

    let bytes = sample.pack(&values![17u16, 21.5f32, 0b101u8, "kitchen"])?;
    println!("\nPacked: {:02X?}", bytes);

    let (id, temp, flags, tag): (u16, f32, u8, Vec<u8>) = sample.unpack_tuple(&bytes)?;
    println!("Unpacked: id={}, temp={}, flags={:#b}, tag={:?}", id, temp, flags, String::from_utf8_lossy(&tag));

    // Same values, native alignment vs. packed
    println!("\n=== Layout modes ===");
    for format in ["@bhiq", "=bhiq", "<bhiq", ">bhiq"] {
        println!("  {:<6} -> {} bytes", format, calcsize(format)?);
    }

    // Streaming records through any Read/Write
    println!("\n=== Streaming ===");
    let mut writer = RecordWriter::new(">Ih", Vec::new())?;
    for i in 0..3u32 {
        writer.write_record(&values![i * 1000, -(i as i16)])?;
    }
    let stream = writer.into_inner();
    println!("Wrote {} bytes", stream.len());

    let reader = RecordReader::new(">Ih", Cursor::new(&stream))?;
    for record in reader {
        println!("  {:?}", record?);
    }

    // Failures are values, not panics
    println!("\n=== Errors ===");
    if let Err(err) = pack("<2i", &values![1i32]) {
        println!("  {}", err);
    }
    if let Err(err) = calcsize("<hZ") {
        println!("  {}", err);
    }

    Ok(())
}
