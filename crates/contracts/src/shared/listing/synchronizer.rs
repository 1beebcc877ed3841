//! Синхронизатор фильтра списка.
//!
//! Держит в согласованном состоянии три вещи: полный набор элементов,
//! выбор пользователя (рубрика + строка поиска) и адресную строку.
//! Все переходы синхронные и не зависят от рендера, поэтому их можно
//! проверять обычными unit-тестами.
//!
//! Переходы, инициированные пользователем, сразу пересчитывают видимый
//! список и возвращают [`NavigationRequest`]: запись в адресную строку
//! выполняет вызывающая сторона, асинхронно. Наблюдение адресной строки
//! ([`ListingSynchronizer::on_location_changed`]) новых записей не порождает.
//!
//! Если запись в адресную строку завершилась уже после более нового
//! перехода (своего или внешнего), её наблюдение игнорируется: побеждает
//! последнее событие, а не последнее завершение.

use std::collections::VecDeque;

use super::filter::{derive_view, FilterState, Searchable};
use super::query::ListingQuery;
use crate::domain::blog::category::BlogCategory;

/// Запрос на перезапись адресной строки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Порядковый номер, растёт с каждым запросом
    pub seq: u64,
    /// Нормализованные параметры; пишутся оба, всегда
    pub query: ListingQuery,
}

impl NavigationRequest {
    /// Полный адрес для перехода, например `/blog?category=diy&q=`
    pub fn href(&self, path: &str) -> String {
        format!("{}?{}", path, self.query.to_query_string())
    }

    fn category(&self) -> Option<BlogCategory> {
        self.query.normalized_category()
    }

    fn search(&self) -> &str {
        self.query.q.as_deref().unwrap_or("")
    }
}

/// Чем закончилась обработка наблюдённой адресной строки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOutcome {
    /// Внешняя навигация (назад/вперёд, прямая ссылка): фильтр обновлён
    Applied,
    /// Завершилась наша последняя запись: состояние уже совпадает
    Acknowledged,
    /// Завершилась устаревшая запись: более новое состояние сохранено
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListingSynchronizer<T> {
    items: Vec<T>,
    filter: FilterState,
    /// Строка поиска, по которой построен видимый список
    applied_search: String,
    view: Vec<usize>,
    /// Незавершённые записи, не больше одной на каждый адрес
    pending: VecDeque<NavigationRequest>,
    next_seq: u64,
    /// Записи с меньшим номером перекрыты внешней навигацией
    superseded_below: u64,
}

impl<T: Searchable> ListingSynchronizer<T> {
    /// Начальное состояние при входе на страницу. Отсутствующие или
    /// нераспознанные значения означают "без фильтра".
    pub fn new(items: Vec<T>, initial_category: Option<&str>, initial_search: Option<&str>) -> Self {
        let search = initial_search.map(str::trim).unwrap_or("").to_string();
        let mut this = Self {
            items,
            filter: FilterState::new(
                initial_category.and_then(BlogCategory::from_code),
                search.clone(),
            ),
            applied_search: search,
            view: Vec::new(),
            pending: VecDeque::new(),
            next_seq: 1,
            superseded_below: 0,
        };
        this.recompute();
        this
    }

    pub fn from_query(items: Vec<T>, query: &ListingQuery) -> Self {
        Self::new(items, query.category.as_deref(), query.q.as_deref())
    }

    /// Замена набора элементов (пришёл ответ загрузки страницы).
    /// Фильтр сохраняется, видимый список пересчитывается.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.recompute();
    }

    /// Выбор рубрики по коду. Неизвестный код снимает фильтр по рубрике.
    /// Строку поиска не трогает.
    pub fn set_category(&mut self, category: &str) -> NavigationRequest {
        self.select_category(BlogCategory::from_code(category))
    }

    pub fn select_category(&mut self, category: Option<BlogCategory>) -> NavigationRequest {
        self.filter.active_category = category;
        self.recompute();
        self.issue_navigation()
    }

    /// Живой ввод в поле поиска: ни пересчёта, ни навигации
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    /// Применить введённую строку поиска
    pub fn submit_search(&mut self) -> NavigationRequest {
        self.applied_search = self.filter.search_text.trim().to_string();
        self.recompute();
        self.issue_navigation()
    }

    /// Внешнее изменение параметра `category` в адресной строке.
    /// Строку поиска не меняет и навигацию не запускает.
    pub fn on_location_changed(&mut self, category: Option<&str>) -> LocationOutcome {
        self.observe(category.and_then(BlogCategory::from_code), None)
    }

    /// Внешнее изменение адресной строки целиком: синхронизирует и рубрику,
    /// и строку поиска (`q`). Навигацию не запускает.
    pub fn on_location_entered(&mut self, location: &ListingQuery) -> LocationOutcome {
        self.observe(
            location.normalized_category(),
            Some(location.normalized_search().unwrap_or_default()),
        )
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn active_category(&self) -> Option<BlogCategory> {
        self.filter.active_category
    }

    pub fn applied_search(&self) -> &str {
        &self.applied_search
    }

    /// Адресная строка, соответствующая текущему видимому списку
    pub fn current_query(&self) -> ListingQuery {
        ListingQuery::new(self.filter.active_category, &self.applied_search)
    }

    /// Видимый список в исходном порядке
    pub fn derived_view(&self) -> Vec<&T> {
        self.view.iter().map(|&idx| &self.items[idx]).collect()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Условие для индикатора "No results found"
    pub fn is_empty_result(&self) -> bool {
        self.view.is_empty()
    }

    /// Запись уже не нужна: после неё был более новый переход
    pub fn is_superseded(&self, seq: u64) -> bool {
        seq + 1 < self.next_seq || seq < self.superseded_below
    }

    /// Завершение записи, которое не будет наблюдаться через адресную
    /// строку (запись пропущена или адрес не изменился)
    pub fn complete_navigation(&mut self, request: &NavigationRequest) -> LocationOutcome {
        self.pending.retain(|req| req.seq != request.seq);
        if self.is_superseded(request.seq) {
            LocationOutcome::Stale
        } else {
            LocationOutcome::Acknowledged
        }
    }

    #[cfg(test)]
    fn pending_navigations(&self) -> usize {
        self.pending.len()
    }

    fn recompute(&mut self) {
        let applied = FilterState::new(self.filter.active_category, self.applied_search.as_str());
        self.view = derive_view(&self.items, &applied);
    }

    fn issue_navigation(&mut self) -> NavigationRequest {
        let request = NavigationRequest {
            seq: self.next_seq,
            query: self.current_query(),
        };
        self.next_seq += 1;
        self.pending.retain(|req| req.query != request.query);
        self.pending.push_back(request.clone());
        request
    }

    fn observe(&mut self, category: Option<BlogCategory>, search: Option<String>) -> LocationOutcome {
        let matched = self.pending.iter().rposition(|req| {
            req.category() == category && search.as_deref().map_or(true, |q| req.search() == q)
        });

        if let Some(pos) = matched {
            let newest = pos + 1 == self.pending.len();
            let superseded = self.pending[pos].seq < self.superseded_below;
            self.pending.drain(..=pos);
            return if newest && !superseded {
                LocationOutcome::Acknowledged
            } else {
                LocationOutcome::Stale
            };
        }

        // Незавершённые записи остаются в очереди: их позднее наблюдение
        // не должно перетереть состояние внешней навигации
        self.superseded_below = self.next_seq;
        self.filter.active_category = category;
        if let Some(q) = search {
            self.filter.search_text = q.clone();
            self.applied_search = q;
        }
        self.recompute();
        LocationOutcome::Applied
    }
}
