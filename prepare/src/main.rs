use std::fs::File;

use unicode_chardata_prepare::output;
use unicode_chardata_prepare::tables;

fn main()
{
    let tables = tables::bake(tables::BMP_CODEPOINTS);

    output::write_database(&tables, &mut File::create("./../data/unicodedata_db.rs.txt").unwrap());
    output::write_types(&tables, &mut File::create("./../data/unicodetype_db.rs.txt").unwrap());

    println!("суммарный размер таблиц: {} kb", tables.size() / 1024);
}
