use std::io::Write;

use unicode_chardata_source::properties::{BIDI_CLASS_NAMES, CATEGORY_NAMES};

use crate::compact::{int_size, SplitTable};
use crate::tables::ChardataTables;

use self::format::*;

mod format;
mod stats;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 100;

/// пишем базу свойств: уникальные записи, таблицы имён, строки декомпозиций
/// и оба двухуровневых индекса
pub fn write_database(tables: &ChardataTables, output: &mut impl Write)
{
    let records = format_record_vec(
        tables.records.iter().map(|r| {
            format!(
                "({}, {}, {}, {}), ",
                r.category, r.combining, r.bidirectional, r.mirrored
            )
        }),
        FORMAT_STRING_LENGTH,
    );

    let out = format!(
        "// файл сгенерирован unicode_chardata_prepare из UnicodeData.txt, не редактируйте его\n\n\
         /// уникальные записи базы свойств: (категория, CCC, класс направления, зеркальность)\n\
         pub static DATABASE_RECORDS: &[(u8, u8, u8, u8)] = &[{}  ];\n\n\
         /// аббревиатуры категорий, индекс - значение поля категории\n\
         pub static CATEGORY_NAMES: &[&str] = &[{}  ];\n\n\
         /// аббревиатуры классов направления, индекс - значение поля направления\n\
         pub static BIDI_CLASS_NAMES: &[&str] = &[{}  ];\n\n\
         /// строки декомпозиций; нулевой слот - декомпозиции нет\n\
         pub static DECOMP_DATA: &[&str] = &[{}  ];\n\n\
         {}{}",
        records,
        format_str_vec(&CATEGORY_NAMES, FORMAT_STRING_LENGTH),
        format_str_vec(&BIDI_CLASS_NAMES, FORMAT_STRING_LENGTH),
        format_str_vec(tables.decomp_data.as_slice(), FORMAT_STRING_LENGTH),
        format_split_table("", &tables.record_index),
        format_split_table("DECOMP_", &tables.decomp_index),
    );

    write!(output, "{}", out).unwrap();

    stats::print_database(tables);
}

/// пишем таблицу типов: уникальные записи и двухуровневый индекс
pub fn write_types(tables: &ChardataTables, output: &mut impl Write)
{
    let records = format_record_vec(
        tables.type_records.iter().map(|r| {
            format!("({}, {}, {}, {}), ", r.flags, r.upper, r.lower, r.title)
        }),
        FORMAT_STRING_LENGTH,
    );

    let out = format!(
        "// файл сгенерирован unicode_chardata_prepare из UnicodeData.txt, не редактируйте его\n\n\
         /// уникальные записи типов: (флаги, дельта upper, дельта lower, дельта title)\n\
         pub static TYPE_RECORDS: &[(u8, u16, u16, u16)] = &[{}  ];\n\n\
         {}",
        records,
        format_split_table("TYPE_", &tables.type_index),
    );

    write!(output, "{}", out).unwrap();

    stats::print_types(tables);
}

/// сдвиг и обе части двухуровневого индекса
fn format_split_table(prefix: &str, split: &SplitTable) -> String
{
    format!(
        "/// сдвиг двухуровневого индекса\n\
         pub const {}SHIFT: u32 = {};\n\n\
         {}{}",
        prefix,
        split.shift,
        format_num_array(format!("{}INDEX1", prefix).as_str(), split.index.as_slice()),
        format_num_array(format!("{}INDEX2", prefix).as_str(), split.data.as_slice()),
    )
}

/// объявление статического массива; тип элемента подбирается по значениям
fn format_num_array(name: &str, data: &[u32]) -> String
{
    let element_type = match int_size(data) {
        1 => "u8",
        2 => "u16",
        _ => "u32",
    };

    format!(
        "pub static {}: &[{}] = &[{}  ];\n\n",
        name,
        element_type,
        format_num_vec(data, FORMAT_STRING_LENGTH),
    )
}
