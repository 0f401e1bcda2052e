//! Built-in serviceable cities.
//!
//! Administrative centres of the Russian Federation's regions, spelled in
//! Cyrillic exactly as the booking form's city picker offers them.

pub const BUILTIN_CITIES: &[&str] = &[
    "Абакан",
    "Анадырь",
    "Архангельск",
    "Астрахань",
    "Барнаул",
    "Белгород",
    "Биробиджан",
    "Благовещенск",
    "Брянск",
    "Великий Новгород",
    "Владивосток",
    "Владикавказ",
    "Владимир",
    "Волгоград",
    "Вологда",
    "Воронеж",
    "Горно-Алтайск",
    "Грозный",
    "Екатеринбург",
    "Иваново",
    "Ижевск",
    "Иркутск",
    "Йошкар-Ола",
    "Казань",
    "Калининград",
    "Калуга",
    "Кемерово",
    "Киров",
    "Кострома",
    "Краснодар",
    "Красноярск",
    "Курган",
    "Курск",
    "Кызыл",
    "Липецк",
    "Магадан",
    "Магас",
    "Майкоп",
    "Махачкала",
    "Москва",
    "Мурманск",
    "Нальчик",
    "Нарьян-Мар",
    "Нижний Новгород",
    "Новосибирск",
    "Омск",
    "Орёл",
    "Оренбург",
    "Пенза",
    "Пермь",
    "Петрозаводск",
    "Петропавловск-Камчатский",
    "Псков",
    "Ростов-на-Дону",
    "Рязань",
    "Салехард",
    "Самара",
    "Санкт-Петербург",
    "Саранск",
    "Саратов",
    "Севастополь",
    "Симферополь",
    "Смоленск",
    "Ставрополь",
    "Сыктывкар",
    "Тамбов",
    "Тверь",
    "Томск",
    "Тула",
    "Тюмень",
    "Улан-Удэ",
    "Ульяновск",
    "Уфа",
    "Хабаровск",
    "Ханты-Мансийск",
    "Чебоксары",
    "Челябинск",
    "Черкесск",
    "Чита",
    "Элиста",
    "Южно-Сахалинск",
    "Якутск",
    "Ярославль",
];

/// Owned copy of [`BUILTIN_CITIES`].
pub fn all_cities() -> Vec<String> {
    BUILTIN_CITIES.iter().map(|&c| c.to_owned()).collect()
}
