//! Kotlin accessor class rendering.

use spgen_codegen::{CodeBuilder, RenderContext, SuffixMode, coerce_default};
use spgen_core::{ItemType, TypeMapper};
use spgen_manifest::SpItem;

use crate::KotlinTypeMapper;

/// Import line for the storage library.
pub const MMKV_IMPORT: &str = "import com.tencent.mmkv.MMKV";

/// MMKV instance id shared by every generated class.
pub const STORE_ID: &str = "__kvsp__";

/// Render the accessor class for one group.
///
/// Pure: the output depends only on the context and the suffix mode. Items
/// keep their schema order.
pub fn render_accessor(ctx: &RenderContext<'_>, suffix_mode: SuffixMode) -> String {
    let package = ctx.config.package.as_str();
    let class = ctx.class_name.as_str();
    let created = format!("Created by {} at {}.", ctx.config.author, ctx.timestamp());

    CodeBuilder::kotlin()
        .when(!package.is_empty(), |b| {
            b.line(&format!("package {}", package)).blank()
        })
        .line(MMKV_IMPORT)
        .blank()
        .block_doc([ctx.group.name.as_str(), created.as_str()])
        .line(&format!("class {} {{", class))
        .indent()
        .blank()
        .block_with_close("companion object {", "}", |b| {
            b.line("@JvmStatic")
                .line(&format!("val instance: {0} by lazy {{ {0}() }}", class))
        })
        .blank()
        .block_with_close("private val mmkv: MMKV by lazy {", "}", |b| {
            b.line(&format!(
                "MMKV.mmkvWithID(\"{}\", MMKV.MULTI_PROCESS_MODE)!!",
                STORE_ID
            ))
        })
        .blank()
        .line("private constructor()")
        .blank()
        .line(&format!("// === Total {} ===", ctx.group.items.len()))
        .each(&ctx.group.items, |b, item| {
            render_property(b.blank(), item, suffix_mode)
        })
        .dedent()
        .line("}")
        .build()
}

fn render_property(b: CodeBuilder, item: &SpItem, suffix_mode: SuffixMode) -> CodeBuilder {
    let symbol = KotlinTypeMapper.map_item_type(item.item_type);
    let default = coerce_default(item.item_type, &item.default_value, suffix_mode);
    let args = if default.is_empty() {
        format!("\"{}\"", item.name)
    } else {
        format!("\"{}\", {}", item.name, default)
    };
    // decodeString returns a nullable String
    let unwrap = if item.item_type == ItemType::String { "!!" } else { "" };

    b.block_doc([item.comment.as_str()])
        .line(&format!("var {}: {}", item.accessor_name(), symbol))
        .indent()
        .block_with_close("get() {", "}", |b| {
            b.line(&format!("return mmkv.decode{}({}){}", symbol, args, unwrap))
        })
        .block_with_close("set(value) {", "}", |b| {
            b.line(&format!("mmkv.encode(\"{}\", value)", item.name))
        })
        .dedent()
}
