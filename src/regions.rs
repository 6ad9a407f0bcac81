use crate::models::ListingCategory;

/// All regions offered in the region picker, domestic coast first.
pub const REGIONS: [&str; 13] = [
    "Крым",
    "Краснодарский край",
    "Кавказские Минеральные Воды",
    "Абхазия",
    "Турция",
    "Грузия",
    "Индия",
    "Таиланд",
    "Малайзия",
    "Индонезия",
    "ОАЭ",
    "Египет",
    "Вьетнам",
];

/// Regions counted as domestic when deriving a listing's country.
pub const DOMESTIC_REGIONS: [&str; 3] = [
    "Крым",
    "Краснодарский край",
    "Кавказские Минеральные Воды",
];

/// Amenity suggestions offered for stay listings.
pub const STAY_AMENITIES: [&str; 9] = [
    "Wi-Fi",
    "Кондиционер",
    "Кухня",
    "Парковка",
    "Бассейн",
    "С животными",
    "Детская площадка",
    "Мангал",
    "Трансфер",
];

pub fn is_domestic_region(region: &str) -> bool {
    DOMESTIC_REGIONS.contains(&region)
}

/// Country label derived from the region at submission time.
pub fn country_for_region(region: &str) -> &'static str {
    if is_domestic_region(region) {
        "Россия"
    } else {
        "Зарубежье"
    }
}

/// Cities offered for a region, empty when the region is unknown.
pub fn cities_in_region(region: &str) -> &'static [&'static str] {
    match region {
        "Крым" => &[
            "Ялта",
            "Севастополь",
            "Алушта",
            "Евпатория",
            "Феодосия",
            "Судак",
        ],
        "Краснодарский край" => &[
            "Сочи",
            "Адлер",
            "Анапа",
            "Геленджик",
            "Новороссийск",
            "Туапсе",
        ],
        "Кавказские Минеральные Воды" => &[
            "Пятигорск",
            "Кисловодск",
            "Ессентуки",
            "Железноводск",
            "Минеральные Воды",
            "Лермонтов",
        ],
        "Абхазия" => &["Гагра", "Пицунда", "Новый Афон", "Сухум"],
        "Турция" => &[
            "Анталья",
            "Аланья",
            "Кемер",
            "Мармарис",
            "Бодрум",
            "Фетхие",
        ],
        "Грузия" => &["Батуми", "Кобулети", "Сарпи"],
        "Индия" => &["Гоа", "Варкала", "Гокарна"],
        "Таиланд" => &["Пхукет", "Самуи", "Паттайя", "Панган", "Краби"],
        "Малайзия" => &["Лангкави", "Пенанг", "Кота-Кинабалу"],
        "Индонезия" => &["Чангу", "Убуд", "Улувату", "Семиньяк", "Нуса-Дуа"],
        "ОАЭ" => &["Дубай", "Абу-Даби", "Шарджа", "Рас-эль-Хайма"],
        "Египет" => &["Шарм-эш-Шейх", "Хургада", "Дахаб", "Марса-Алам"],
        "Вьетнам" => &["Нячанг", "Дананг", "Фукуок", "Муйне"],
        _ => &[],
    }
}

/// Regions offered in the authoring wizard for a category. Domestic
/// regions are listed for stays only; this is a display-time constraint,
/// the data model itself accepts any region.
pub fn available_regions(category: ListingCategory) -> Vec<&'static str> {
    if category == ListingCategory::Stay {
        REGIONS.to_vec()
    } else {
        REGIONS
            .iter()
            .copied()
            .filter(|r| !is_domestic_region(r))
            .collect()
    }
}

/// Tag suggestions offered in the authoring wizard for a category.
pub fn suggested_amenities(category: ListingCategory) -> &'static [&'static str] {
    match category {
        ListingCategory::Stay => &STAY_AMENITIES,
        ListingCategory::Moto => &["Шлем", "Страховка", "Багажник"],
        ListingCategory::Sim => &["5G", "Безлимит", "Доставка"],
        ListingCategory::Exchange => &["Курьер", "Безопасно", "Лучший курс", "Без комиссии"],
        ListingCategory::Food => &["Доставка", "Завтраки", "Веранда", "Wi-Fi"],
    }
}
