use super::PropertiesError;

/// класс направления текста (bidi class)
/// берется из UCD: четвертая колонка UnicodeData.txt
///
/// дискриминант - индекс аббревиатуры в таблице BIDI_CLASS_NAMES; нулевой
/// слот (пустая строка) отведен под кодпоинты без записи, изоляты
/// (LRI, RLI, FSI, PDI) добавлены в хвост таблицы, чтобы не сдвигать
/// исторические индексы
///
/// группы классов:
///     strong (L, R, AL) - символы с явно заданным направлением
///     weak (EN, ES, ET, AN, CS, NSM, BN) - направление зависит от контекста
///     neutral (B, S, WS, ON) - символы без определенного направления
///     explicit (LRE, LRO, RLE, RLO, PDF, LRI, RLI, FSI, PDI) - явное управление направлением
///
#[derive(Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum BidiClass
{
    /// L - любой сильный LTR-символ
    LeftToRight = 1,
    /// LRE - U+202A - символ вставки слева направо (LR embedding control)
    LeftToRightEmbedding = 2,
    /// LRO - U+202D - символ переопределения слева направо (LR override control)
    LeftToRightOverride = 3,
    /// R - любой сильный (не арабский) RTL-символ
    RightToLeft = 4,
    /// AL - любой сильный (арабский) RTL-символ
    ArabicLetter = 5,
    /// RLE - U+202B - символ вставки справа налево (RL embedding control)
    RightToLeftEmbedding = 6,
    /// RLO - U+202E - символ переопределения справа налево (RL override control)
    RightToLeftOverride = 7,
    /// PDF - U+202C - символ окончания направляющего форматирования (pop directional format)
    PopDirectionalFormat = 8,
    /// EN - любая цифра ASCII или восточно-арабская индийская цифра
    EuropeanNumber = 9,
    /// ES - знаки плюса и минуса
    EuropeanSeparator = 10,
    /// ET - терминатор в контексте числового формата, включает символы валюты
    EuropeanTerminator = 11,
    /// AN - любая арабско-индийская цифра
    ArabicNumber = 12,
    /// CS - запятые, двоеточия и слеши
    CommonSeparator = 13,
    /// NSM - не занимающий места символ, не влияющий на направление текста
    NonspacingMark = 14,
    /// BN - большинство символов форматирования, управляющие коды или недопустимые символы
    BoundaryNeutral = 15,
    /// B - различные символы новой строки, которые разделяют абзацы
    ParagraphSeparator = 16,
    /// S - различные управляющие коды, связанные с сегментами текста
    SegmentSeparator = 17,
    /// WS - пробельные символы, такие как пробелы и табуляции
    Whitespace = 18,
    /// ON - большинство прочих символов и знаков пунктуации
    OtherNeutral = 19,
    /// LRI - U+2066 - символ изоляции слева направо (LR isolate control)
    LeftToRightIsolate = 20,
    /// RLI - U+2067 - символ изоляции справа налево (RL isolate control)
    RightToLeftIsolate = 21,
    /// FSI - U+2068 - символ изоляции первого сильного символа (first strong isolate)
    FirstStrongIsolate = 22,
    /// PDI - U+2069 - символ окончания изоляции (pop directional isolate)
    PopDirectionalIsolate = 23,
}

/// аббревиатуры классов направления в порядке дискриминантов
/// нулевой слот - кодпоинты без записи в UCD
pub const BIDI_CLASS_NAMES: [&str; 24] = [
    "", "L", "LRE", "LRO", "R", "AL", "RLE", "RLO", "PDF", "EN", "ES", "ET", "AN", "CS", "NSM",
    "BN", "B", "S", "WS", "ON", "LRI", "RLI", "FSI", "PDI",
];

impl BidiClass
{
    /// разделительные классы, дающие флаг пробельного символа (WS, B, S)
    #[inline]
    pub fn is_separating(&self) -> bool
    {
        matches!(
            self,
            Self::Whitespace | Self::ParagraphSeparator | Self::SegmentSeparator
        )
    }
}

impl From<BidiClass> for u8
{
    #[inline]
    fn from(value: BidiClass) -> Self
    {
        value as u8
    }
}

impl TryFrom<&str> for BidiClass
{
    type Error = PropertiesError;

    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "L" => Self::LeftToRight,
            "LRE" => Self::LeftToRightEmbedding,
            "LRO" => Self::LeftToRightOverride,
            "R" => Self::RightToLeft,
            "AL" => Self::ArabicLetter,
            "RLE" => Self::RightToLeftEmbedding,
            "RLO" => Self::RightToLeftOverride,
            "PDF" => Self::PopDirectionalFormat,
            "EN" => Self::EuropeanNumber,
            "ES" => Self::EuropeanSeparator,
            "ET" => Self::EuropeanTerminator,
            "AN" => Self::ArabicNumber,
            "CS" => Self::CommonSeparator,
            "NSM" => Self::NonspacingMark,
            "BN" => Self::BoundaryNeutral,
            "B" => Self::ParagraphSeparator,
            "S" => Self::SegmentSeparator,
            "WS" => Self::Whitespace,
            "ON" => Self::OtherNeutral,
            "LRI" => Self::LeftToRightIsolate,
            "RLI" => Self::RightToLeftIsolate,
            "FSI" => Self::FirstStrongIsolate,
            "PDI" => Self::PopDirectionalIsolate,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        })
    }
}
