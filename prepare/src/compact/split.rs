use std::collections::HashMap;

/// наименьший размер элемента массива в байтах: 1, 2 или 4
///
/// это оценка для выбора типа элемента, а не валидация - значения,
/// не влезающие и в 4 байта, тоже получают размер 4
pub fn int_size(data: &[u32]) -> usize
{
    let max = *data.iter().max().unwrap();

    match max {
        max if max < 0x100 => 1,
        max if max < 0x1_0000 => 2,
        _ => 4,
    }
}

/// двухуровневая таблица, полученная из массива индексов
///
/// закон восстановления исходного массива t:
///     t[i] == data[(index[i >> shift] << shift) + (i & mask)],
/// где mask = (1 << shift) - 1
pub struct SplitTable
{
    /// индексы блоков, по одному на блок исходного массива
    pub index: Vec<u32>,
    /// данные дедуплицированных блоков
    pub data: Vec<u32>,
    /// сдвиг: длина блока равна 2^shift
    pub shift: u32,
}

impl SplitTable
{
    /// значение исходного массива по позиции
    #[inline]
    pub fn get(&self, i: usize) -> u32
    {
        let mask = (1usize << self.shift) - 1;

        self.data[((self.index[i >> self.shift] as usize) << self.shift) + (i & mask)]
    }

    /// суммарный размер обоих массивов в байтах
    pub fn size(&self) -> usize
    {
        self.index.len() * int_size(&self.index) + self.data.len() * int_size(&self.data)
    }
}

/// разбить массив индексов на двухуровневую таблицу минимального размера
///
/// перебираются все сдвиги от 0 до maxshift; для каждого исходный массив
/// режется на блоки длиной 2^shift, повторяющиеся блоки схлопываются,
/// остается вариант с наименьшим суммарным размером. при равенстве
/// размеров выигрывает меньший сдвиг (замена только по строгому минимуму)
pub fn split_bins(t: &[u32]) -> SplitTable
{
    assert!(!t.is_empty());

    // максимальный сдвиг, при котором в диапазон индексов помещается
    // хотя бы один полный блок: количество сдвигов len - 1 вправо до нуля
    let mut n = t.len() - 1;
    let mut maxshift = 0;

    while n >> 1 != 0 {
        n >>= 1;
        maxshift += 1;
    }

    let mut best: Option<SplitTable> = None;
    let mut bytes = usize::MAX;

    for shift in 0 ..= maxshift {
        let size = 1usize << shift;

        let mut index: Vec<u32> = vec![];
        let mut data: Vec<u32> = vec![];
        let mut cache: HashMap<&[u32], usize> = HashMap::new();

        // последний блок окажется короче, если длина массива не кратна 2^shift
        for bin in t.chunks(size) {
            let offset = match cache.get(bin) {
                Some(&offset) => offset,
                None => {
                    let offset = data.len();

                    cache.insert(bin, offset);
                    data.extend_from_slice(bin);

                    offset
                }
            };

            index.push((offset >> shift) as u32);
        }

        let split = SplitTable {
            index,
            data,
            shift: shift as u32,
        };

        if split.size() < bytes {
            bytes = split.size();
            best = Some(split);
        }
    }

    let best = best.unwrap();

    // проверяем закон восстановления на каждой позиции: ошибка здесь -
    // баг самого разбиения, который нельзя пропустить дальше
    if cfg!(debug_assertions) {
        for (i, &value) in t.iter().enumerate() {
            assert_eq!(value, best.get(i));
        }
    }

    best
}
