use std::collections::HashMap;
use std::hash::Hash;

/// интернирование записей: таблица уникальных значений в порядке первого
/// появления + хешмап значение - слот для поиска
///
/// нулевой слот всегда занят дефолтной записью - ей кодируются позиции,
/// для которых данных нет
pub struct Interner<T>
{
    table: Vec<T>,
    cache: HashMap<T, u32>,
}

impl<T: Eq + Hash + Clone> Interner<T>
{
    pub fn new(default: T) -> Self
    {
        let mut cache = HashMap::new();
        cache.insert(default.clone(), 0);

        Self {
            table: vec![default],
            cache,
        }
    }

    /// слот значения; значение, встреченное впервые, дописывается в конец таблицы
    pub fn intern(&mut self, value: T) -> u32
    {
        match self.cache.get(&value) {
            Some(&slot) => slot,
            None => {
                let slot = self.table.len() as u32;

                self.cache.insert(value.clone(), slot);
                self.table.push(value);

                slot
            }
        }
    }

    /// таблица уникальных значений
    pub fn table(&self) -> &[T]
    {
        self.table.as_slice()
    }

    /// забрать таблицу уникальных значений
    pub fn into_table(self) -> Vec<T>
    {
        self.table
    }
}
