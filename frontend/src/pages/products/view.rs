use common::format::{euros, percent};
use common::model::product::Product;
use common::pagination::total_pages;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::card_grid::CardGrid;
use crate::components::dialog::Dialog;
use crate::components::pagination::pager;
use crate::components::search_box::SearchBox;
use crate::config::PAGE_SIZE;
use crate::helpers::{input_checked, input_value, selected_file, textarea_value};

use super::messages::{Field, Msg};
use super::state::{ProductForm, ProductsPage};

pub fn view(page: &ProductsPage, ctx: &Context<ProductsPage>) -> Html {
    let link = ctx.link();

    html! {
        <section class="page products-page">
            <div class="toolbar">
                <SearchBox placeholder="Nom, catégorie..." on_search={link.callback(Msg::Search)} />
                if page.editable {
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        <span class="material-icons">{ "add" }</span>
                        { "Nouveau produit" }
                    </button>
                }
            </div>
            if page.loading {
                <p class="loading">{ "Chargement..." }</p>
            } else {
                <CardGrid min_width={220_u32}>
                    { for page.products.iter().map(|product| product_card(page, link, product)) }
                </CardGrid>
            }
            { pager(page.page, total_pages(page.total, PAGE_SIZE), link.callback(Msg::SetPage)) }
            if let Some(form) = &page.form {
                { form_dialog(form, link) }
            }
            if let Some(product) = &page.deleting {
                <Dialog
                    title="Supprimer le produit"
                    on_close={link.callback(|_| Msg::Close)}
                    actions={html! {
                        <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                            { "Supprimer" }
                        </button>
                    }}
                >
                    <p>{ format!("Supprimer « {} » du catalogue ?", product.name) }</p>
                </Dialog>
            }
        </section>
    }
}

fn product_card(page: &ProductsPage, link: &Scope<ProductsPage>, product: &Product) -> Html {
    let controls = if page.editable {
        let (edit, toggle, remove) = (product.clone(), product.clone(), product.clone());
        html! {
            <footer class="row-actions">
                <label class="switch" title="Disponible">
                    <input type="checkbox" checked={product.available}
                        onchange={link.callback(move |_| Msg::ToggleAvailable(toggle.clone()))} />
                    { "Disponible" }
                </label>
                <button class="icon-btn" title="Modifier" onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                    <span class="material-icons">{ "edit" }</span>
                </button>
                <button class="icon-btn danger" title="Supprimer" onclick={link.callback(move |_| Msg::AskDelete(remove.clone()))}>
                    <span class="material-icons">{ "delete" }</span>
                </button>
            </footer>
        }
    } else {
        html! {}
    };

    html! {
        <article class={classes!("card", "product-card", (!product.is_orderable()).then_some("inactive"))} key={product.id.clone()}>
            {
                match &product.image {
                    Some(src) => html! { <img class="product-image" src={src.clone()} alt={product.name.clone()} /> },
                    None => html! {
                        <div class="product-image placeholder">
                            <span class="material-icons">{ "bakery_dining" }</span>
                        </div>
                    },
                }
            }
            <header>
                <h3>{ product.name.clone() }</h3>
                <span class="badge badge-neutral">{ product.category.clone() }</span>
            </header>
            if !product.description.is_empty() {
                <p class="muted">{ product.description.clone() }</p>
            }
            if !product.ingredients.is_empty() {
                <p class="ingredients">{ product.ingredients.join(", ") }</p>
            }
            <p class="price">
                <span class="strong">{ euros(product.unit_price) }</span>{ " HT · " }
                { euros(product.unit_price_ttc()) }{ " TTC" }
                <span class="muted">{ format!(" (TVA {})", percent(product.tax_rate)) }</span>
            </p>
            if !product.available {
                <span class="badge badge-warning">{ "Indisponible" }</span>
            }
            { controls }
        </article>
    }
}

fn form_dialog(form: &ProductForm, link: &Scope<ProductsPage>) -> Html {
    let product = &form.product;
    let title = if product.id.is_empty() { "Nouveau produit".to_string() } else { format!("Modifier {}", product.name) };
    let actions = html! {
        <button class="btn btn-primary" disabled={form.saving || form.reading_image}
            onclick={link.callback(|_| Msg::Save)}>
            { "Enregistrer" }
        </button>
    };

    html! {
        <Dialog title={title} on_close={link.callback(|_| Msg::Close)} actions={actions}>
            <div class="form-grid">
                <label>
                    { "Nom" }
                    <input type="text" value={product.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Name(input_value(&e))))} />
                </label>
                <label>
                    { "Catégorie" }
                    <input type="text" value={product.category.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Category(input_value(&e))))} />
                </label>
                <label>
                    { "Prix unitaire HT (€)" }
                    <input type="text" inputmode="decimal" value={form.price.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Price(input_value(&e))))} />
                </label>
                <label>
                    { "TVA (%)" }
                    <input type="text" inputmode="decimal" value={form.tax_percent.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(Field::TaxPercent(input_value(&e))))} />
                </label>
                <label class="full">
                    { "Description" }
                    <textarea value={product.description.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Description(textarea_value(&e))))} />
                </label>
                <label class="full">
                    { "Ingrédients (séparés par des virgules)" }
                    <input type="text" value={form.ingredients.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Ingredients(input_value(&e))))} />
                </label>
                <label class="checkbox">
                    <input type="checkbox" checked={product.available}
                        onchange={link.callback(|e: Event| Msg::Edit(Field::Available(input_checked(&e))))} />
                    { "Disponible à la commande" }
                </label>
                <div class="full image-field">
                    if let Some(src) = &product.image {
                        <img class="product-image" src={src.clone()} alt="" />
                        <button class="btn" onclick={link.callback(|_| Msg::RemoveImage)}>{ "Retirer l'image" }</button>
                    }
                    <label class="btn">
                        <span class="material-icons">{ "image" }</span>
                        { if form.reading_image { "Lecture..." } else { "Choisir une image" } }
                        <input type="file" accept="image/*" hidden={true}
                            onchange={link.batch_callback(|e: Event| selected_file(&e).map(Msg::ImagePicked))} />
                    </label>
                </div>
            </div>
            if let Some(error) = &form.error {
                <p class="form-error">{ error.clone() }</p>
            }
        </Dialog>
    }
}
