use unicode_chardata_prepare::encode::*;
use unicode_chardata_prepare::output;
use unicode_chardata_prepare::tables;
use unicode_chardata_source::parse;

/// выборка реальных строк UnicodeData.txt, достаточная для мини-таблиц
const SAMPLE: &str = "\
0020;SPACE;Zs;0;WS;;;;;N;;;;;\n\
0028;LEFT PARENTHESIS;Ps;0;ON;;;;;Y;OPENING PARENTHESIS;;;;\n\
0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;\n\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041\n\
00BD;VULGAR FRACTION ONE HALF;No;0;ON;<fraction> 0031 2044 0032;;;1/2;N;FRACTION ONE HALF;;;;\n\
00C0;LATIN CAPITAL LETTER A WITH GRAVE;Lu;0;L;0041 0300;;;;N;LATIN CAPITAL LETTER A GRAVE;;;00E0;\n\
00E0;LATIN SMALL LETTER A WITH GRAVE;Ll;0;L;0061 0300;;;;N;LATIN SMALL LETTER A GRAVE;;00C0;;00C0\n\
01C5;LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON;Lt;0;L;<compat> 0044 017E;;;;N;LATIN LETTER CAPITAL D SMALL Z HACEK;;01C4;01C6;01C5\n\
0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING ACUTE;;;;\n";

/// запеченные таблицы восстанавливают запись каждой позиции диапазона
#[test]
fn bake_reconstructs_records()
{
    let unicode = parse(SAMPLE);
    let limit = 0x400u32;

    let tables = tables::bake_from(&unicode, limit);

    for code in 0 .. limit {
        let i = code as usize;

        let expected = match unicode.get(&code) {
            Some(codepoint) => database_record(codepoint),
            None => DatabaseRecord::default(),
        };
        assert_eq!(tables.records[tables.record_index.get(i) as usize], expected);

        let expected = match unicode.get(&code) {
            Some(codepoint) => type_record(codepoint),
            None => TypeRecord::default(),
        };
        assert_eq!(
            tables.type_records[tables.type_index.get(i) as usize],
            expected
        );

        let expected = match unicode.get(&code) {
            Some(codepoint) if !codepoint.decomposition.is_empty() => {
                codepoint.decomposition.to_data_string()
            }
            Some(_) | None => String::new(),
        };
        assert_eq!(
            tables.decomp_data[tables.decomp_index.get(i) as usize],
            expected
        );
    }
}

/// флаги классификации и дельты регистровых отображений
#[test]
fn encode_flags_and_deltas()
{
    let unicode = parse(SAMPLE);

    let upper_a = type_record(&unicode[&0x41]);
    assert_eq!(upper_a.flags, ALPHA_MASK | TITLE_MASK | UPPER_MASK);
    assert_eq!(upper_a.lower, 0x20);
    assert_eq!(upper_a.upper, 0);

    // дельта "вверх" по регистру уходит в отрицательную зону
    // и хранится по модулю 2^16
    let lower_a = type_record(&unicode[&0x61]);
    assert_eq!(lower_a.flags, ALPHA_MASK | LOWER_MASK);
    assert_eq!(lower_a.upper, 0xFFE0);
    assert_eq!(lower_a.title, 0xFFE0);

    let zero = type_record(&unicode[&0x30]);
    assert_eq!(zero.flags, DECIMAL_MASK | DIGIT_MASK | NUMERIC_MASK);

    let space = type_record(&unicode[&0x20]);
    assert_eq!(space.flags, SPACE_MASK);

    let half = type_record(&unicode[&0xBD]);
    assert_eq!(half.flags, NUMERIC_MASK);

    let title_dz = type_record(&unicode[&0x1C5]);
    assert_eq!(title_dz.flags, ALPHA_MASK | TITLE_MASK);

    let paren = database_record(&unicode[&0x28]);
    assert_eq!(paren.mirrored, 1);

    let acute = database_record(&unicode[&0x301]);
    assert_eq!(acute.combining, 230);
}

/// строки декомпозиций: текст поля UCD, нулевой слот - пустая строка
#[test]
fn decomposition_strings()
{
    let unicode = parse(SAMPLE);

    assert_eq!(unicode[&0xC0].decomposition.to_data_string(), "0041 0300");
    assert_eq!(
        unicode[&0xBD].decomposition.to_data_string(),
        "<fraction> 0031 2044 0032"
    );

    let tables = tables::bake_from(&unicode, 0x100);

    assert_eq!(tables.decomp_data[0], "");
    assert!(tables.decomp_data.contains(&"0041 0300".to_string()));
}

/// усеченный режим Latin-1: индекс покрывает ровно 256 позиций
#[test]
fn bake_latin1_range()
{
    let unicode = parse(SAMPLE);

    let tables = tables::bake_from(&unicode, tables::LATIN1_CODEPOINTS);

    let size = 1usize << tables.record_index.shift;
    assert_eq!(tables.record_index.index.len(), (256 + size - 1) / size);
}

/// запись таблиц в буфер: все объявления на месте
#[test]
fn write_declarations()
{
    let unicode = parse(SAMPLE);
    let tables = tables::bake_from(&unicode, 0x100);

    let mut database: Vec<u8> = vec![];
    let mut types: Vec<u8> = vec![];

    output::write_database(&tables, &mut database);
    output::write_types(&tables, &mut types);

    let database = String::from_utf8(database).unwrap();
    let types = String::from_utf8(types).unwrap();

    for decl in [
        "pub static DATABASE_RECORDS: &[(u8, u8, u8, u8)]",
        "pub static CATEGORY_NAMES: &[&str]",
        "pub static BIDI_CLASS_NAMES: &[&str]",
        "pub static DECOMP_DATA: &[&str]",
        "pub const SHIFT: u32",
        "pub const DECOMP_SHIFT: u32",
        "pub static INDEX1: &[u8]",
        "pub static INDEX2: &[u8]",
    ] {
        assert!(database.contains(decl), "нет объявления: {}", decl);
    }

    for decl in [
        "pub static TYPE_RECORDS: &[(u8, u16, u16, u16)]",
        "pub const TYPE_SHIFT: u32",
        "pub static TYPE_INDEX1: &[u8]",
    ] {
        assert!(types.contains(decl), "нет объявления: {}", decl);
    }
}
