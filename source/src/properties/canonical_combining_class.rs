use super::PropertiesError;

/// класс канонического комбинирования (Canonical Combining Class, CCC)
/// берется из UCD: третья колонка UnicodeData.txt
///
/// в записи базы свойств хранится как есть - один байт
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CanonicalCombiningClass(u8);

impl CanonicalCombiningClass
{
    /// CCC = 0, символ не переупорядочивается
    #[inline]
    pub fn is_not_reordered(&self) -> bool
    {
        self.0 == 0
    }
}

macro_rules! from_into {
    ($($type:ty),+) => {
        $(
            impl From<$type> for CanonicalCombiningClass
            {
                #[inline]
                fn from(value: $type) -> Self
                {
                    Self(value as u8)
                }
            }

            impl From<CanonicalCombiningClass> for $type
            {
                #[inline]
                fn from(value: CanonicalCombiningClass) -> Self
                {
                    value.0 as $type
                }
            }
        )+
    }
}

from_into!(u8, u16, u32, u64);

impl TryFrom<&str> for CanonicalCombiningClass
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(Self(value.parse()?))
    }
}
