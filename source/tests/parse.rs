use unicode_chardata_source::parse;
use unicode_chardata_source::properties::*;

/// выборка строк UnicodeData.txt: обычные записи, диапазоны, суррогаты,
/// Private Use и первая строка дополнительной плоскости
const SAMPLE: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;\n\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
00C0;LATIN CAPITAL LETTER A WITH GRAVE;Lu;0;L;0041 0300;;;;N;LATIN CAPITAL LETTER A GRAVE;;;00E0;\n\
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;\n\
4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;\n\
D800;<Non Private Use High Surrogate, First>;Cs;0;L;;;;;N;;;;;\n\
DB7F;<Non Private Use High Surrogate, Last>;Cs;0;L;;;;;N;;;;;\n\
E000;<Private Use, First>;Co;0;L;;;;;N;;;;;\n\
F8FF;<Private Use, Last>;Co;0;L;;;;;N;;;;;\n\
10000;LINEAR B SYLLABLE B008 A;Lo;0;L;;;;;N;;;;;\n";

/// обычные записи
#[test]
fn parse_regular_codepoints()
{
    let unicode = parse(SAMPLE);

    let a = &unicode[&0x41];
    assert_eq!(a.gc, GeneralCategory::UppercaseLetter);
    assert_eq!(a.bc, BidiClass::LeftToRight);
    assert_eq!(a.simple_lowercase_mapping.code(), Some(0x61));
    assert!(a.decomposition.is_empty());

    let grave = &unicode[&0xC0];
    assert_eq!(grave.decomposition.codes, vec![0x41, 0x300]);
    assert_eq!(grave.decomposition.tag, None);
    assert_eq!(grave.simple_lowercase_mapping.code(), Some(0xE0));
}

/// <control> - название, а не диапазон
#[test]
fn parse_control()
{
    let unicode = parse(SAMPLE);

    assert_eq!(unicode[&0x0].gc, GeneralCategory::Control);
    assert_eq!(unicode[&0x0].bc, BidiClass::BoundaryNeutral);
}

/// диапазон First/Last заполняется целиком
#[test]
fn parse_range_expansion()
{
    let unicode = parse(SAMPLE);

    assert_eq!(unicode[&0x3400].gc, GeneralCategory::OtherLetter);
    assert_eq!(unicode[&0x4000].gc, GeneralCategory::OtherLetter);
    assert_eq!(unicode[&0x4DBF].gc, GeneralCategory::OtherLetter);
}

/// суррогаты и Private Use остаются без записей
#[test]
fn parse_skips_surrogates_and_private_use()
{
    let unicode = parse(SAMPLE);

    assert!(unicode.get(&0xD800).is_none());
    assert!(unicode.get(&0xE000).is_none());
    assert!(unicode.get(&0xF8FF).is_none());
}

/// разбор заканчивается на границе BMP
#[test]
fn parse_stops_after_bmp()
{
    let unicode = parse(SAMPLE);

    assert!(unicode.get(&0x10000).is_none());
}

/// неизвестные значения свойств - ошибка разбора
#[test]
fn parse_property_errors()
{
    assert_eq!(
        GeneralCategory::try_from("Xx"),
        Err(PropertiesError::UnknownPropertyValue)
    );
    assert_eq!(
        BidiClass::try_from(""),
        Err(PropertiesError::UnknownPropertyValue)
    );
    assert_eq!(
        BidiMirrored::try_from("?"),
        Err(PropertiesError::UnknownPropertyValue)
    );
    assert_eq!(
        CanonicalCombiningClass::try_from("abc"),
        Err(PropertiesError::UnknownPropertyValue)
    );
    assert_eq!(
        DecompositionTag::try_from("<unknown>"),
        Err(PropertiesError::UnknownPropertyValue)
    );
}
