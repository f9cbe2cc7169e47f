// Console text shown to the players

pub const BANNER: &str = "******** Вітаємо у грі хрестики - нолики! ********\n";
pub const NAME_PROMPT: &str = "Введіть ім'я: ";
pub const INVALID_NAME: &str = "\nІм'я введено невалідно.";
pub const CELL_BUSY: &str = "\nКлітинка зайнята, оберіть іншу.\n";
pub const DRAW: &str = "Нічия!";

pub fn name_instructions(letter: char) -> String {
    format!("Введіть ім'я гравця, який буде грати за -{}- та натисніть Enter", letter)
}

pub fn move_prompt(size: usize) -> String {
    format!(
        "Введіть координати (рядок та стовпець, від 1 до {}) через пробіл: ",
        size
    )
}

pub fn invalid_move(size: usize) -> String {
    format!(
        "\nВаш хід не валідний! Це повинно бути два числа через пробіл від 1 до {}",
        size
    )
}

pub fn your_turn(name: &str) -> String {
    format!("Гравець {}, ваш хід!", name)
}

pub fn winner(name: &str) -> String {
    format!("Гравець {} виграв!", name)
}
