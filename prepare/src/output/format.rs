/// выложить уже отформатированные элементы в строки с ограничением длины
fn wrap(items: impl Iterator<Item = String>, boundary: usize) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for e_str in items {
        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = e_str.len();
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }
    output.push('\n');

    output
}

/// представить массив чисел в текстовом виде
pub fn format_num_vec(input: &[u32], boundary: usize) -> String
{
    wrap(
        input.iter().map(|&e| match e == 0 {
            true => "0, ".to_owned(),
            false => format!("0x{:X}, ", e),
        }),
        boundary,
    )
}

/// представить массив строк в текстовом виде
pub fn format_str_vec<S: AsRef<str>>(input: &[S], boundary: usize) -> String
{
    wrap(
        input.iter().map(|e| format!("\"{}\", ", e.as_ref())),
        boundary,
    )
}

/// представить массив записей-кортежей в текстовом виде
/// записи приходят уже отформатированными, здесь только раскладка по строкам
pub fn format_record_vec(input: impl Iterator<Item = String>, boundary: usize) -> String
{
    wrap(input, boundary)
}
