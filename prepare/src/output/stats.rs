use crate::compact::{int_size, SplitTable};
use crate::tables::ChardataTables;

/// сводка по базе свойств
pub fn print_database(tables: &ChardataTables)
{
    println!(
        "база свойств:\n  уникальных записей: {}",
        tables.records.len()
    );
    print_split("индекс записей", &tables.record_index);

    println!("  строк декомпозиций: {}", tables.decomp_data.len());
    print_split("индекс декомпозиций", &tables.decomp_index);
}

/// сводка по таблице типов
pub fn print_types(tables: &ChardataTables)
{
    println!(
        "таблица типов:\n  уникальных записей: {}",
        tables.type_records.len()
    );
    print_split("индекс типов", &tables.type_index);
}

/// размеры частей двухуровневого индекса
fn print_split(name: &str, split: &SplitTable)
{
    println!(
        "  {}: сдвиг {}, {} x {} + {} x {} = {} байт",
        name,
        split.shift,
        split.index.len(),
        int_size(split.index.as_slice()),
        split.data.len(),
        int_size(split.data.as_slice()),
        split.size(),
    );
}
