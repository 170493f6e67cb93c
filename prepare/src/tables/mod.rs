use std::collections::HashMap;
use std::hash::Hash;

use unicode_chardata_source::properties::Codepoint;
use unicode_chardata_source::UNICODE;

use crate::compact::{split_bins, Interner, SplitTable};
use crate::encode::{database_record, type_record, DatabaseRecord, TypeRecord};

/// полный диапазон: базовая многоязыковая плоскость
pub const BMP_CODEPOINTS: u32 = 0x1_0000;
/// усеченный режим: только Latin-1
pub const LATIN1_CODEPOINTS: u32 = 0x100;

/// подготовленные таблицы для записи
pub struct ChardataTables
{
    /// уникальные записи базы свойств
    pub records: Vec<DatabaseRecord>,
    /// двухуровневый индекс записей базы свойств
    pub record_index: SplitTable,
    /// уникальные строки декомпозиций
    pub decomp_data: Vec<String>,
    /// двухуровневый индекс строк декомпозиций
    pub decomp_index: SplitTable,
    /// уникальные записи типов
    pub type_records: Vec<TypeRecord>,
    /// двухуровневый индекс записей типов
    pub type_index: SplitTable,
}

impl ChardataTables
{
    /// суммарный размер закодированных индексов в байтах
    pub fn size(&self) -> usize
    {
        self.record_index.size() + self.decomp_index.size() + self.type_index.size()
    }
}

/// подготовить таблицы для кодпоинтов 0 .. limit
pub fn bake(limit: u32) -> ChardataTables
{
    bake_from(&UNICODE, limit)
}

/// вариант bake с явной таблицей свойств - для усеченных диапазонов и тестов
pub fn bake_from(unicode: &HashMap<u32, Codepoint>, limit: u32) -> ChardataTables
{
    // 1) база свойств: категория, CCC, класс направления, зеркальность
    let (records, index) = intern_records(unicode, limit, database_record);
    let record_index = split_bins(index.as_slice());

    // 2) строки декомпозиций
    let (decomp_data, index) = intern_decompositions(unicode, limit);
    let decomp_index = split_bins(index.as_slice());

    // 3) типы символов и регистровые дельты
    let (type_records, index) = intern_records(unicode, limit, type_record);
    let type_index = split_bins(index.as_slice());

    ChardataTables {
        records,
        record_index,
        decomp_data,
        decomp_index,
        type_records,
        type_index,
    }
}

/// один проход по диапазону: кодпоинты без записи в UCD получают нулевой
/// слот (дефолтную запись), остальные кодируются и интернируются
fn intern_records<T, F>(
    unicode: &HashMap<u32, Codepoint>,
    limit: u32,
    encode: F,
) -> (Vec<T>, Vec<u32>)
where
    T: Default + Eq + Hash + Clone,
    F: Fn(&Codepoint) -> T,
{
    let mut interner = Interner::new(T::default());
    let mut index = Vec::with_capacity(limit as usize);

    for code in 0 .. limit {
        let slot = match unicode.get(&code) {
            Some(codepoint) => interner.intern(encode(codepoint)),
            None => 0,
        };

        index.push(slot);
    }

    (interner.into_table(), index)
}

/// проход для строк декомпозиций: нулевой слот - пустая строка,
/// кодпоинты без декомпозиции тоже получают его
fn intern_decompositions(unicode: &HashMap<u32, Codepoint>, limit: u32) -> (Vec<String>, Vec<u32>)
{
    let mut interner = Interner::new(String::new());
    let mut index = Vec::with_capacity(limit as usize);

    for code in 0 .. limit {
        let slot = match unicode.get(&code) {
            Some(codepoint) if !codepoint.decomposition.is_empty() => {
                interner.intern(codepoint.decomposition.to_data_string())
            }
            Some(_) | None => 0,
        };

        index.push(slot);
    }

    (interner.into_table(), index)
}
