use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt
///
/// дискриминант - индекс аббревиатуры категории в таблице CATEGORY_NAMES:
/// записи базы свойств хранят категорию именно как этот индекс, поэтому
/// порядок зафиксирован и менять его нельзя
///
/// слот 17 вариантом не является - в таблице имён он исторически занят
/// повтором Cn
///
#[derive(Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено
    /// дефолтный вариант при отсутствии записи о символе в UCD
    Unassigned = 0,

    /// Lu - прописная буква
    UppercaseLetter = 1,
    /// Ll - строчная буква
    LowercaseLetter = 2,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 4,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 5,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 6,

    /// Nd - десятичная цифра
    DecimalNumber = 7,
    /// Nl - буквоподобный числовой символ
    LetterNumber = 8,
    /// No - прочие числовые символы
    OtherNumber = 9,

    /// Zs - разделитель-пробел
    SpaceSeparator = 10,
    /// Zl - разделитель строки
    LineSeparator = 11,
    /// Zp - разделитель параграфов
    ParagraphSeparator = 12,

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 13,
    /// Cf - управляющий символ форматирования
    Format = 14,
    /// Cs - символ-суррогат
    Surrogate = 15,
    /// Co - символ для приватного использования
    PrivateUse = 16,

    /// Lm - буква-модификатор
    ModifierLetter = 18,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 19,

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 20,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 21,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 22,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 23,
    /// Pi - начальный знак цитаты
    InitialPunctuation = 24,
    /// Pf - конечный знак цитаты
    FinalPunctuation = 25,
    /// Po - знак препинания другого типа
    OtherPunctuation = 26,

    /// Sm - математический символ
    MathSymbol = 27,
    /// Sc - символ валюты
    CurrencySymbol = 28,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 29,
    /// So - прочие символы
    OtherSymbol = 30,
}

/// аббревиатуры категорий в порядке дискриминантов
/// слот 17 - исторический повтор Cn, раскладка зафиксирована потребителями таблиц
pub const CATEGORY_NAMES: [&str; 31] = [
    "Cn", "Lu", "Ll", "Lt", "Mn", "Mc", "Me", "Nd", "Nl", "No", "Zs", "Zl", "Zp", "Cc", "Cf",
    "Cs", "Co", "Cn", "Lm", "Lo", "Pc", "Pd", "Ps", "Pe", "Pi", "Pf", "Po", "Sm", "Sc", "Sk",
    "So",
];

impl GeneralCategory
{
    /// относится-ли категория к буквам (L: Lu, Ll, Lt, Lm, Lo)
    #[inline]
    pub fn is_letter(&self) -> bool
    {
        matches!(
            self,
            Self::UppercaseLetter
                | Self::LowercaseLetter
                | Self::TitlecaseLetter
                | Self::ModifierLetter
                | Self::OtherLetter
        )
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "Cn" => Self::Unassigned,
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "Mn" => Self::NonspacingMark,
            "Mc" => Self::SpacingMark,
            "Me" => Self::EnclosingMark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Cs" => Self::Surrogate,
            "Co" => Self::PrivateUse,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "Pc" => Self::ConnectorPunctuation,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Po" => Self::OtherPunctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        })
    }
}
