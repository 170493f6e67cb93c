use unicode_chardata_source::properties::{Codepoint, GeneralCategory, SimpleCaseMapping};

/// буква (Lu, Ll, Lt, Lm, Lo)
pub const ALPHA_MASK: u8 = 0x01;
/// десятичная цифра
pub const DECIMAL_MASK: u8 = 0x02;
/// цифра
pub const DIGIT_MASK: u8 = 0x04;
/// строчная буква
pub const LOWER_MASK: u8 = 0x08;
/// числовой символ
pub const NUMERIC_MASK: u8 = 0x10;
/// пробельный символ
pub const SPACE_MASK: u8 = 0x20;
/// заглавная или прописная буква
pub const TITLE_MASK: u8 = 0x40;
/// прописная буква
pub const UPPER_MASK: u8 = 0x80;

/// запись базы свойств; дефолтная запись (нулевой слот таблицы уникальных
/// записей) описывает кодпоинт без данных - Cn, CCC = 0, без направления
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct DatabaseRecord
{
    /// категория - индекс в CATEGORY_NAMES
    pub category: u8,
    /// класс канонического комбинирования
    pub combining: u8,
    /// класс направления - индекс в BIDI_CLASS_NAMES
    pub bidirectional: u8,
    /// "зеркальный" символ
    pub mirrored: u8,
}

/// запись типа символа: флаги классификации и дельты регистровых отображений
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TypeRecord
{
    /// битовые флаги классификации (см. *_MASK)
    pub flags: u8,
    /// дельта до соответствующей прописной буквы
    pub upper: u16,
    /// дельта до соответствующей строчной буквы
    pub lower: u16,
    /// дельта до соответствующей заглавной буквы
    pub title: u16,
}

/// собрать запись базы свойств из кодпоинта
pub fn database_record(codepoint: &Codepoint) -> DatabaseRecord
{
    DatabaseRecord {
        category: u8::from(codepoint.gc),
        combining: u8::from(codepoint.ccc),
        bidirectional: u8::from(codepoint.bc),
        mirrored: u8::from(codepoint.bidi_mirrored),
    }
}

/// собрать запись типа символа из кодпоинта
pub fn type_record(codepoint: &Codepoint) -> TypeRecord
{
    let gc = codepoint.gc;

    let mut flags = 0;

    if gc.is_letter() {
        flags |= ALPHA_MASK;
    }

    if codepoint.numeric.is_decimal() {
        flags |= DECIMAL_MASK;
    }

    if codepoint.numeric.is_digit() {
        flags |= DIGIT_MASK;
    }

    if gc == GeneralCategory::LowercaseLetter {
        flags |= LOWER_MASK;
    }

    if codepoint.numeric.is_numeric() {
        flags |= NUMERIC_MASK;
    }

    if gc == GeneralCategory::SpaceSeparator || codepoint.bc.is_separating() {
        flags |= SPACE_MASK;
    }

    if gc == GeneralCategory::TitlecaseLetter || gc == GeneralCategory::UppercaseLetter {
        flags |= TITLE_MASK;
    }

    if gc == GeneralCategory::UppercaseLetter {
        flags |= UPPER_MASK;
    }

    TypeRecord {
        flags,
        upper: case_delta(codepoint.code, &codepoint.simple_uppercase_mapping),
        lower: case_delta(codepoint.code, &codepoint.simple_lowercase_mapping),
        title: case_delta(codepoint.code, &codepoint.simple_titlecase_mapping),
    }
}

/// дельта-предиктор регистрового отображения: хранится не код буквы,
/// а разница с кодом символа по модулю 2^16; 0 - отображения нет
fn case_delta(code: u32, mapping: &SimpleCaseMapping) -> u16
{
    match mapping.code() {
        Some(mapped) => (mapped.wrapping_sub(code) & 0xFFFF) as u16,
        None => 0,
    }
}
